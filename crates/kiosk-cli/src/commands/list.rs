//! `kiosk list` command.

use clap::Args;

use kiosk_config::KioskConfig;
use kiosk_types::OperationKind;

use crate::{output, shared};

/// List the registered operations.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one kind of operation.
    #[arg(short, long, value_parser = ["tool", "resource", "prompt"])]
    pub kind: Option<String>,
}

fn parse_kind(kind: &str) -> Option<OperationKind> {
    match kind {
        "tool" => Some(OperationKind::Tool),
        "resource" => Some(OperationKind::Resource),
        "prompt" => Some(OperationKind::Prompt),
        _ => None,
    }
}

/// Executes the list command.
pub fn execute(args: &ListArgs, config: &KioskConfig) -> anyhow::Result<()> {
    let registry = shared::build_registry(config)?;
    let kind = args.kind.as_deref().and_then(parse_kind);
    print!("{}", output::operation_table(&registry, kind));
    Ok(())
}
