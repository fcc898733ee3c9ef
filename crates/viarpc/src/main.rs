mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use viarpc_core::{ClientConfig, RpcClient, RpcError};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut config = ClientConfig::from_url(&args.rpc_url).context("parse --rpc-url")?;
    if let Some(user) = args.rpc_user {
        config.user = user;
    }
    if let Some(pass) = args.rpc_pass {
        config.password = pass;
    }
    config.ca = args.rpc_ca;

    let client = RpcClient::from_config(config)
        .context("build RPC client")?
        .with_jsonrpc_version(args.jsonrpc);
    tracing::debug!(url = %client.base_url(), method = %args.method, "sending rpc call");

    let params = args.params.iter().map(|raw| parse_param(raw)).collect();
    let response = client
        .call_async(&args.method, params)
        .await
        .map_err(|err| eyre!(format_rpc_error(&args.rpc_url, &err)))?;

    if let Some(output) = render_result(response.get()) {
        println!("{output}");
    }
    Ok(())
}

/// JSON when it parses, otherwise the raw string.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Strings print bare, `null` prints nothing, everything else as pretty JSON.
fn render_result(result: &Value) -> Option<String> {
    match result {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())),
    }
}

fn format_rpc_error(rpc_url: &str, err: &RpcError) -> String {
    let mut lines = match err {
        RpcError::Daemon(envelope) => {
            return format!(
                "error code: {}\nerror message:\n{}",
                envelope.code, envelope.message
            );
        }
        RpcError::Configuration(message) => vec![format!("invalid configuration: {message}")],
        RpcError::Transport(envelope) => vec![
            format!("could not complete RPC call to `{}`", redact(rpc_url)),
            format!("transport error: {envelope}"),
        ],
    };

    let source_error = err.message();
    match err.code() {
        401 | 403 => lines.push(
            "hint: authentication failed; verify the credentials in --rpc-url or --rpc-user/--rpc-pass"
                .into(),
        ),
        404 => lines.push("hint: endpoint path is invalid; verify the RPC URL".into()),
        _ if source_error.contains("dns error") => lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        ),
        _ if source_error.contains("certificate") || source_error.contains("tls") => lines.push(
            "hint: TLS handshake failed; verify --rpc-ca and that the endpoint uses HTTPS".into(),
        ),
        _ if source_error.contains("error sending request for url") => lines.push(
            "hint: request could not be sent; verify the daemon is running with -server and rpcallowip"
                .into(),
        ),
        _ => {}
    }

    lines.join("\n")
}

/// Drop the password from a connection string before printing it.
fn redact(rpc_url: &str) -> String {
    match ClientConfig::from_url(rpc_url) {
        Ok(config) if !config.password.is_empty() => {
            format!("{}://{}@{}:{}", config.scheme, config.user, config.host, config.port)
        }
        _ => rpc_url.to_owned(),
    }
}
