//! `time` tool: wall-clock time in an IANA timezone.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use kiosk_protocol::mcp::Content;
use kiosk_protocol::ValidatedArguments;
use kiosk_types::{ParamType, ParameterSchema};

use crate::error::CallFailure;
use crate::registry::{OperationDescriptor, ToolHandler};

/// Tool name.
pub const NAME: &str = "time";

/// 24-hour display format.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current instant.
pub type Clock = fn() -> DateTime<Utc>;

/// Renders `now` in the timezone named `timezone`.
///
/// # Errors
///
/// Returns a domain failure if `timezone` is not a known IANA identifier.
pub fn format_time(now: DateTime<Utc>, timezone: &str) -> Result<String, CallFailure> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| CallFailure::domain(format!("invalid timezone: '{timezone}'")))?;
    let local = now.with_timezone(&tz);
    Ok(format!(
        "Current time in {timezone}: {}",
        local.format(DISPLAY_FORMAT)
    ))
}

/// The tool. The clock is injectable so tests can pin the instant.
pub struct TimeTool {
    clock: Clock,
}

impl TimeTool {
    /// Uses the system clock.
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Uses `clock` instead of the system clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for TimeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolHandler for TimeTool {
    async fn call(&self, args: &ValidatedArguments) -> Result<Vec<Content>, CallFailure> {
        let text = format_time((self.clock)(), args.string("timezone")?)?;
        Ok(vec![Content::text(text)])
    }
}

/// Registry entry for the tool.
pub fn descriptor(tool: TimeTool) -> OperationDescriptor {
    OperationDescriptor::tool(
        NAME,
        "Show the current date and time in a timezone",
        ParameterSchema::new().param(
            "timezone",
            ParamType::String,
            "IANA timezone identifier, e.g. Asia/Seoul or America/New_York",
        ),
        tool,
    )
}
