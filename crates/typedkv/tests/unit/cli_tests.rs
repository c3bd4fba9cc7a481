//! Command-Line Runner Tests

use clap::Parser;
use typedkv::KvCapability;
use typedkv::cli::{Cli, Command, Outcome, execute};
use typedkv::domain::value_objects::GetOptions;
use typedkv::infrastructure::init_test_app;

async fn run_command(kv: &typedkv::KvStore, args: &[&str]) -> (anyhow::Result<Outcome>, String) {
    let cli = Cli::try_parse_from(std::iter::once("typedkv").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let result = execute(kv, &cli.command, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_put_with_options() {
    let cli = Cli::try_parse_from([
        "typedkv",
        "--config",
        "local.toml",
        "put",
        "greeting",
        "hello",
        "--ttl",
        "60",
        "--metadata",
        r#"{"lang":"en"}"#,
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("local.toml")));
    assert_eq!(
        cli.command,
        Command::Put {
            key: "greeting".to_string(),
            value: "hello".to_string(),
            ttl: Some(60),
            expiration: None,
            metadata: Some(r#"{"lang":"en"}"#.to_string()),
        }
    );
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["typedkv"]).is_err());
    assert!(Cli::try_parse_from(["typedkv", "get"]).is_err());
}

#[tokio::test]
async fn test_put_get_delete_cycle() {
    let kv = init_test_app().resolve_raw();

    let (result, _) = run_command(&kv, &["put", "greeting", "hello"]).await;
    assert_eq!(result.unwrap(), Outcome::Done);

    let (result, out) = run_command(&kv, &["get", "greeting"]).await;
    assert_eq!(result.unwrap(), Outcome::Done);
    assert_eq!(out, "hello\n");

    let (result, _) = run_command(&kv, &["delete", "greeting"]).await;
    assert_eq!(result.unwrap(), Outcome::Done);

    let (result, out) = run_command(&kv, &["get", "greeting"]).await;
    assert_eq!(result.unwrap(), Outcome::Absent);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_get_json_pretty_prints() {
    let kv = init_test_app().resolve_raw();
    run_command(&kv, &["put", "cfg", r#"{"a":1}"#]).await.0.unwrap();

    let (result, out) = run_command(&kv, &["get", "cfg", "--json"]).await;
    assert_eq!(result.unwrap(), Outcome::Done);
    assert_eq!(out, "{\n  \"a\": 1\n}\n");

    run_command(&kv, &["put", "plain", "not json"]).await.0.unwrap();
    let (result, _) = run_command(&kv, &["get", "plain", "--json"]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_put_stores_metadata() {
    let kv = init_test_app().resolve_raw();
    run_command(
        &kv,
        &["put", "doc", "body", "--metadata", r#"{"owner":"ops"}"#],
    )
    .await
    .0
    .unwrap();

    let (_, metadata) = kv
        .get_with_metadata("doc", GetOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(metadata, Some(serde_json::json!({"owner": "ops"})));

    let (result, _) = run_command(&kv, &["put", "doc", "body", "--metadata", "{oops"]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_pages_and_all() {
    let kv = init_test_app().resolve_raw();
    for key in ["user:1", "user:2", "user:3", "order:1"] {
        run_command(&kv, &["put", key, "x"]).await.0.unwrap();
    }

    let (_, out) = run_command(&kv, &["list", "--prefix", "user:", "--limit", "2"]).await;
    assert_eq!(out, "user:1\nuser:2\n");

    let (_, out) = run_command(&kv, &["list", "--prefix", "user:", "--limit", "2", "--all"]).await;
    assert_eq!(out, "user:1\nuser:2\nuser:3\n");
}
