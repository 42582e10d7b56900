use lcg_pipeline::{fallback, normalize, process, FallbackReason, RawResponse};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_fence_stripping_example() {
    assert_eq!(normalize("```jsx\nconst x = 1;\n```").as_str(), "const x = 1;");
}

#[test]
fn test_invalid_raw_responses_map_to_invalid_notice() {
    let expected = fallback(FallbackReason::InvalidResponse);
    assert_eq!(process(&RawResponse::Empty), expected);
    assert_eq!(process(&RawResponse::NonText), expected);
    assert_eq!(process(&RawResponse::from_text("   ")), expected);
}

#[test]
fn test_disallowed_tokens_reject_wherever_they_occur() {
    let expected = fallback(FallbackReason::DisallowedSyntax);
    for text in [
        "import x from 'y'; <div/>",
        "<div/> and then export default",
        "() => { const fs = require('fs'); return <div/>; }",
        "```jsx\nimport React from 'react';\n<div/>\n```",
    ] {
        assert_eq!(process(&RawResponse::from_text(text)), expected, "{text}");
    }
}

#[test]
fn test_accepted_callable_binds_directly() {
    let code = process(&RawResponse::from_text(" ```jsx\n() => <h1>Hi</h1>\n``` "));
    assert_eq!(
        code.as_str(),
        "const Component = () => <h1>Hi</h1>;\nrender(<Component />);\n"
    );
}

#[test]
fn test_accepted_bare_expression_gets_wrapper() {
    let code = process(&RawResponse::from_text("<Box/>"));
    assert_eq!(
        code.as_str(),
        "const Component = () => (<Box/>);\nrender(<Component />);\n"
    );
}

#[test]
fn test_rejection_artifact_ignores_surrounding_content() {
    let short = process(&RawResponse::from_text("import a"));
    let long = process(&RawResponse::from_text(
        "() => <div>perfectly fine</div> /* import */ plus a lot of other text",
    ));
    assert_eq!(short, long);
}

proptest! {
    /// Normalization is idempotent over arbitrary input.
    #[test]
    fn prop_normalize_idempotent(text in ".*") {
        let once = normalize(&text);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// `process` is total and every artifact carries exactly one render
    /// invocation. The gate rejects text containing `render(`, so the one
    /// invocation is always the artifact's own.
    #[test]
    fn prop_process_total_with_single_invocation(text in ".*") {
        let code = process(&RawResponse::from_text(text));
        prop_assert_eq!(code.as_str().matches("render(").count(), 1);
        prop_assert!(!code.as_str().is_empty());
    }

    /// Whatever the input, the artifact defines a component before invoking it.
    #[test]
    fn prop_definition_precedes_invocation(text in ".*") {
        let code = process(&RawResponse::from_text(text));
        let def = code.as_str().find("const ").expect("artifact defines a component");
        let call = code.as_str().find("render(").expect("artifact invokes render");
        prop_assert!(def < call);
    }
}
