use async_trait::async_trait;
use lcg_pipeline::{fallback, FallbackReason};
use lcg_session::{EvalMode, GenerateOutcome, Session, SubmitGate};
use lcg_transport::{GenerationTransport, TransportError};
use mockall::mock;
use pretty_assertions::assert_eq;

mock! {
    pub Transport {}

    #[async_trait]
    impl GenerationTransport for Transport {
        async fn generate(&self, prompt: &str) -> Result<String, TransportError>;
    }
}

#[tokio::test]
async fn successful_generation_wraps_and_keeps_raw_export() {
    let mut transport = MockTransport::new();
    transport
        .expect_generate()
        .times(1)
        .returning(|_| Ok(" ```jsx\n() => <h1>Hi</h1>\n``` ".to_string()));

    let mut session = Session::new(transport);
    session.set_prompt("a greeting header");

    let outcome = session.generate().await;
    let GenerateOutcome::Rendered(request) = outcome else {
        panic!("expected a rendered artifact");
    };

    assert_eq!(
        request.code.as_str(),
        "const Component = () => <h1>Hi</h1>;\nrender(<Component />);\n"
    );
    assert_eq!(request.mode, EvalMode::ExplicitRender);
    // Raw export is the verbatim (trimmed) model text, fences included.
    assert_eq!(
        session.state().raw_export(),
        Some("```jsx\n() => <h1>Hi</h1>\n```")
    );
    assert!(!session.state().is_busy());
}

#[tokio::test]
async fn disallowed_output_becomes_the_fixed_notice() {
    let mut transport = MockTransport::new();
    transport
        .expect_generate()
        .times(1)
        .returning(|_| Ok("import x from 'y'; <div/>".to_string()));

    let mut session = Session::new(transport);
    session.set_prompt("anything");

    match session.generate().await {
        GenerateOutcome::Rendered(request) => {
            assert_eq!(request.code, fallback(FallbackReason::DisallowedSyntax));
        }
        GenerateOutcome::Refused(gate) => panic!("unexpected refusal: {gate:?}"),
    }
}

#[tokio::test]
async fn transport_failure_substitutes_the_failure_notice() {
    let mut transport = MockTransport::new();
    transport.expect_generate().times(1).returning(|_| {
        Err(TransportError::UpstreamStatus {
            status: 500,
            body: "boom".to_string(),
        })
    });

    let mut session = Session::new(transport);
    session.set_prompt("anything");

    match session.generate().await {
        GenerateOutcome::Rendered(request) => {
            assert_eq!(request.code, fallback(FallbackReason::TransportFailure));
        }
        GenerateOutcome::Refused(gate) => panic!("unexpected refusal: {gate:?}"),
    }
    assert!(!session.state().is_busy());
}

#[tokio::test]
async fn blank_prompt_is_refused_without_calling_transport() {
    let mut transport = MockTransport::new();
    transport.expect_generate().times(0);

    let mut session = Session::new(transport);
    session.set_prompt("   ");

    assert_eq!(
        session.generate().await,
        GenerateOutcome::Refused(SubmitGate::EmptyPrompt)
    );
}

#[tokio::test]
async fn empty_model_text_maps_to_invalid_response_notice() {
    let mut transport = MockTransport::new();
    transport
        .expect_generate()
        .times(1)
        .returning(|_| Ok("   \n".to_string()));

    let mut session = Session::new(transport);
    session.set_prompt("anything");

    match session.generate().await {
        GenerateOutcome::Rendered(request) => {
            assert_eq!(request.code, fallback(FallbackReason::InvalidResponse));
        }
        GenerateOutcome::Refused(gate) => panic!("unexpected refusal: {gate:?}"),
    }
}

#[tokio::test]
async fn copy_raw_confirms_only_when_there_is_an_export() {
    let mut transport = MockTransport::new();
    transport
        .expect_generate()
        .times(1)
        .returning(|_| Ok("<Box/>".to_string()));

    let mut session = Session::new(transport);
    assert_eq!(session.copy_raw(), None);
    assert!(!session.state().copy_confirmed());

    session.set_prompt("a box");
    let _ = session.generate().await;

    assert_eq!(session.copy_raw(), Some("<Box/>".to_string()));
    assert!(session.state().copy_confirmed());

    session.clear_copied();
    assert!(!session.state().copy_confirmed());
}
