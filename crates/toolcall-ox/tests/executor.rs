use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde_json::{Value, json};
use toolcall_ox::{
    ArgumentMapping, ArgumentParser, FunctionDeclaration, ParameterKind, ParameterSpec,
    ToolCallRequest, ToolError, ToolExecutor, ToolHandler,
};

// Echoes its message argument back to the caller
#[derive(Debug, Clone)]
struct EchoTool;

impl ToolHandler for EchoTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("echo")
            .description("Echoes the message back to the caller")
            .parameter(ParameterSpec::required("message", ParameterKind::String))
    }

    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move { Ok(json!({"echoed": args["message"]})) }.boxed()
    }
}

// Takes an integer, returns its double
#[derive(Debug, Clone)]
struct DoublerTool;

impl ToolHandler for DoublerTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("double")
            .parameter(ParameterSpec::required("value", ParameterKind::Integer))
    }

    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move {
            let value = args["value"].as_i64().unwrap_or_default();
            Ok(json!(value * 2))
        }
        .boxed()
    }
}

// Takes no parameters at all
#[derive(Debug, Clone)]
struct PingTool;

impl ToolHandler for PingTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("ping")
    }

    fn call(&self, _args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move { Ok(json!("pong")) }.boxed()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("database is on fire")]
struct DatabaseError;

// Always fails with a tool-defined error
#[derive(Debug, Clone)]
struct FailingTool;

impl ToolHandler for FailingTool {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("flaky")
    }

    fn call(&self, _args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move { Err(ToolError::execution("flaky", DatabaseError)) }.boxed()
    }
}

#[tokio::test]
async fn test_default_executor_rejects_malformed_arguments() {
    let executor = ToolExecutor::builder().handler(EchoTool).build();

    let request = ToolCallRequest::new("call_1", "echo", r#"message = "hello""#);
    let result = executor.execute(request).await;

    let Err(ToolError::InvalidArguments { name, error }) = result else {
        panic!("expected invalid arguments, got {result:?}");
    };
    assert_eq!(name, "echo");
    assert!(error.to_string().starts_with("Invalid tool call: "));
}

#[tokio::test]
async fn test_recovery_is_a_construction_time_choice() {
    let executor = ToolExecutor::builder()
        .handler(EchoTool)
        .parser(ArgumentParser::with_recovery())
        .build();

    let request = ToolCallRequest::new("call_2", "echo", r#"message = "hello""#);
    let response = executor.execute(request).await.unwrap();

    assert_eq!(response.id, "call_2");
    assert_eq!(response.content, json!({"echoed": "hello"}));
}

#[tokio::test]
async fn test_well_formed_arguments_pass_the_strict_parser() {
    let executor = ToolExecutor::builder().handler(EchoTool).build();

    let request = ToolCallRequest::new("call_3", "echo", r#"{"message": "hello"}"#);
    let response = executor.execute(request).await.unwrap();

    assert_eq!(response.name, "echo");
    assert_eq!(response.content, json!({"echoed": "hello"}));
}

#[tokio::test]
async fn test_non_object_payload_is_rejected_as_not_a_dictionary() {
    let executor = ToolExecutor::builder().handler(EchoTool).build();

    let result = executor
        .execute(ToolCallRequest::new("call_4", "echo", "42"))
        .await;

    let Err(ToolError::InvalidArguments { error, .. }) = result else {
        panic!("expected invalid arguments, got {result:?}");
    };
    assert_eq!(error.to_string(), "Tool call must be a dictionary.");
}

#[tokio::test]
async fn test_unknown_tools_fail_before_parsing() {
    let executor = ToolExecutor::builder().handler(EchoTool).build();

    let request = ToolCallRequest::new("call_5", "missing", "definitely not json");
    let result = executor.execute(request).await;

    assert!(matches!(result, Err(ToolError::NotFound { name }) if name == "missing"));
}

#[tokio::test]
async fn test_recovered_strings_still_face_schema_validation() {
    let executor = ToolExecutor::builder()
        .handler(DoublerTool)
        .parser(ArgumentParser::with_recovery())
        .build();

    // Recovery always produces a string value, so an integer parameter
    // must fail validation rather than reach the handler.
    let request = ToolCallRequest::new("call_6", "double", r#"value = "21""#);
    let result = executor.execute(request).await;

    let Err(ToolError::SchemaMismatch { detail, .. }) = result else {
        panic!("expected schema mismatch, got {result:?}");
    };
    assert_eq!(detail, "parameter 'value' expects integer, got string");
}

#[tokio::test]
async fn test_empty_payload_reaches_zero_parameter_tools() {
    let executor = ToolExecutor::builder().handler(PingTool).build();

    let response = executor
        .execute(ToolCallRequest::new("call_7", "ping", ""))
        .await
        .unwrap();

    assert_eq!(response.content, json!("pong"));
}

#[tokio::test]
async fn test_handler_failures_keep_their_source() {
    use std::error::Error as _;

    let executor = ToolExecutor::builder().handler(FailingTool).build();

    let result = executor
        .execute(ToolCallRequest::new("call_8", "flaky", "{}"))
        .await;

    let Err(error @ ToolError::Execution { .. }) = result else {
        panic!("expected execution failure, got {result:?}");
    };
    assert_eq!(error.source().unwrap().to_string(), "database is on fire");
}

#[tokio::test]
async fn test_missing_required_parameters_never_reach_the_handler() {
    let executor = ToolExecutor::builder().handler(EchoTool).build();

    let result = executor
        .execute(ToolCallRequest::new("call_9", "echo", "{}"))
        .await;

    let Err(ToolError::SchemaMismatch { detail, .. }) = result else {
        panic!("expected schema mismatch, got {result:?}");
    };
    assert_eq!(detail, "missing required parameter 'message'");
}

#[tokio::test]
async fn test_undeclared_arguments_are_rejected() {
    let executor = ToolExecutor::builder().handler(EchoTool).build();

    let request = ToolCallRequest::new("call_10", "echo", r#"{"message": "hi", "volume": 11}"#);
    let result = executor.execute(request).await;

    let Err(ToolError::SchemaMismatch { detail, .. }) = result else {
        panic!("expected schema mismatch, got {result:?}");
    };
    assert_eq!(detail, "unknown parameter 'volume'");
}

#[test]
fn test_declarations_list_registered_tools() {
    let executor = ToolExecutor::builder()
        .handler(EchoTool)
        .handler(DoublerTool)
        .build();

    let declarations = executor.declarations();
    let names: Vec<&str> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["double", "echo"]);

    let echo = declarations.iter().find(|d| d.name == "echo").unwrap();
    let schema = echo.parameters_schema();
    assert_eq!(schema["properties"]["message"]["type"], "string");
    assert_eq!(schema["required"], json!(["message"]));
}

#[tokio::test]
async fn test_concurrent_executions_share_the_executor() {
    let executor = std::sync::Arc::new(
        ToolExecutor::builder()
            .handler(EchoTool)
            .parser(ArgumentParser::with_recovery())
            .build(),
    );

    let mut join_set = tokio::task::JoinSet::new();
    for index in 0..8 {
        let executor = executor.clone();
        join_set.spawn(async move {
            let payload = format!(r#"{{"message": "run {index}"}}"#);
            executor
                .execute(ToolCallRequest::new(format!("call_{index}"), "echo", payload))
                .await
        });
    }

    while let Some(result) = join_set.join_next().await {
        let response = result.unwrap().unwrap();
        assert_eq!(response.name, "echo");
    }
}
