//! Calculator tools driven through the executor pipeline.
//!
//! Demonstrates the full request flow: lookup, argument parsing, schema
//! validation, and execution. Also shows how a recovery-enabled parser
//! accepts the `key = "value"` payloads some models emit instead of JSON,
//! and where that recovery stops.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde_json::{Value, json};
use toolcall_ox::{
    ArgumentMapping, ArgumentParser, FunctionDeclaration, ParameterKind, ParameterSpec,
    ToolCallRequest, ToolError, ToolExecutor, ToolHandler,
};
use uuid::Uuid;

struct Multiply;

impl ToolHandler for Multiply {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("multiply")
            .description("Multiplies two integers")
            .parameter(ParameterSpec::required("a", ParameterKind::Integer))
            .parameter(ParameterSpec::required("b", ParameterKind::Integer))
    }

    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_i64().unwrap_or_default();
            Ok(json!(a * b))
        }
        .boxed()
    }
}

struct Add;

impl ToolHandler for Add {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("add")
            .description("Adds two integers")
            .parameter(ParameterSpec::required("a", ParameterKind::Integer))
            .parameter(ParameterSpec::required("b", ParameterKind::Integer))
    }

    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_i64().unwrap_or_default();
            Ok(json!(a + b))
        }
        .boxed()
    }
}

struct Note;

impl ToolHandler for Note {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new("note")
            .description("Records a note verbatim")
            .parameter(ParameterSpec::required("text", ParameterKind::String))
    }

    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        async move { Ok(json!({"saved": args["text"]})) }.boxed()
    }
}

fn call_id() -> String {
    format!("call_{}", Uuid::new_v4())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let executor = ToolExecutor::builder()
        .handler(Multiply)
        .handler(Add)
        .handler(Note)
        .parser(ArgumentParser::with_recovery())
        .build();

    println!("Registered tools:");
    for declaration in executor.declarations() {
        println!("  {} {}", declaration.name, declaration.parameters_schema());
    }

    // (121 * 3) + 42, with the second call fed from the first result
    let product = executor
        .execute(ToolCallRequest::new(
            call_id(),
            "multiply",
            r#"{"a": 121, "b": 3}"#,
        ))
        .await?;
    println!("\nmultiply(121, 3) = {}", product.content);

    let sum = executor
        .execute(ToolCallRequest::new(
            call_id(),
            "add",
            json!({"a": product.content, "b": 42}).to_string(),
        ))
        .await?;
    println!("add({}, 42) = {}", product.content, sum.content);
    println!("(121 * 3) + 42 = {}", sum.content);

    // A payload no strict decoder accepts, rescued by the recovery tier
    let note = executor
        .execute(ToolCallRequest::new(
            call_id(),
            "note",
            r#"text = """Remember to rotate the API keys.""""#,
        ))
        .await?;
    println!("\nrecovered note -> {}", note.content);

    // Recovery cannot forge an integer, so this still fails validation
    let rejected = executor
        .execute(ToolCallRequest::new(call_id(), "multiply", r#"a = "121""#))
        .await;
    match rejected {
        Err(error) => println!("malformed multiply rejected: {error}"),
        Ok(response) => println!("unexpected success: {}", response.content),
    }

    Ok(())
}
