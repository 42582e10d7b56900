//! Component wrapping
//!
//! Reshapes accepted text into the canonical artifact form: one named
//! definition plus exactly one invocation of the sandbox's render entry
//! point. Pure function of its inputs.

use crate::types::{CleanedText, OutputCode, ShapeKind};

/// The single component name every artifact binds.
pub const COMPONENT_NAME: &str = "Component";

/// Produce the canonical artifact for `text`.
///
/// `AlreadyCallable` text is bound to the canonical name directly;
/// `BareExpression` text becomes the body of a zero-argument function. Both
/// forms get exactly one appended `render` invocation.
#[must_use]
pub fn wrap(text: &CleanedText, shape: ShapeKind) -> OutputCode {
    let definition = match shape {
        ShapeKind::AlreadyCallable => format!("const {COMPONENT_NAME} = {};", text.as_str()),
        ShapeKind::BareExpression => {
            format!("const {COMPONENT_NAME} = () => ({});", text.as_str())
        }
    };
    OutputCode::new(format!("{definition}\nrender(<{COMPONENT_NAME} />);\n"))
}
