//! `calc` tool: binary arithmetic.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use kiosk_protocol::mcp::Content;
use kiosk_protocol::ValidatedArguments;
use kiosk_types::{ParamType, ParameterSchema};

use crate::error::CallFailure;
use crate::registry::{OperationDescriptor, ToolHandler};

/// Tool name.
pub const NAME: &str = "calc";

/// Supported operators, in display order.
pub const SUPPORTED_OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl FromStr for Operator {
    type Err = CallFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(CallFailure::domain(format!(
                "unsupported operator '{other}'; supported operators: {}",
                SUPPORTED_OPERATORS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };
        f.write_str(symbol)
    }
}

impl Operator {
    /// Applies the operator. Only division by zero fails; overflow is
    /// returned as `inf`/`-inf`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CallFailure> {
        Ok(match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CallFailure::domain("cannot divide by zero"));
                }
                a / b
            }
        })
    }
}

/// Evaluates `a op b` and renders `"{a} {op} {b} = {result}"`.
pub fn calculate(a: f64, b: f64, op: &str) -> Result<String, CallFailure> {
    let operator: Operator = op.parse()?;
    let result = operator.apply(a, b)?;
    Ok(format!("{a} {operator} {b} = {result}"))
}

struct CalcTool;

#[async_trait]
impl ToolHandler for CalcTool {
    async fn call(&self, args: &ValidatedArguments) -> Result<Vec<Content>, CallFailure> {
        let text = calculate(
            args.number("num1")?,
            args.number("num2")?,
            args.string("operator")?,
        )?;
        Ok(vec![Content::text(text)])
    }
}

/// Registry entry for the tool.
pub fn descriptor() -> OperationDescriptor {
    OperationDescriptor::tool(
        NAME,
        "Apply a basic arithmetic operator to two numbers",
        ParameterSchema::new()
            .param("num1", ParamType::Number, "Left operand")
            .param("num2", ParamType::Number, "Right operand")
            .param("operator", ParamType::String, "One of +, -, *, /"),
        CalcTool,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_renders_integral_result() {
        assert_eq!(calculate(6.0, 3.0, "/").expect("ok"), "6 / 3 = 2");
    }

    #[test]
    fn all_operators() {
        assert_eq!(calculate(2.0, 3.0, "+").expect("ok"), "2 + 3 = 5");
        assert_eq!(calculate(2.0, 3.0, "-").expect("ok"), "2 - 3 = -1");
        assert_eq!(calculate(2.5, 4.0, "*").expect("ok"), "2.5 * 4 = 10");
        assert_eq!(calculate(1.0, 4.0, "/").expect("ok"), "1 / 4 = 0.25");
    }

    #[test]
    fn division_by_zero_is_domain_failure() {
        let err = calculate(5.0, 0.0, "/").expect_err("div by zero");
        assert!(matches!(err, CallFailure::Domain { .. }));
        assert_eq!(err.to_string(), "cannot divide by zero");
    }

    #[test]
    fn unsupported_operator_lists_supported_set() {
        let err = calculate(1.0, 2.0, "^").expect_err("unsupported");
        let msg = err.to_string();
        assert!(msg.contains("'^'"));
        for op in SUPPORTED_OPERATORS {
            assert!(msg.contains(op), "missing {op} in {msg}");
        }
    }

    #[test]
    fn overflow_renders_infinity() {
        let text = calculate(f64::MAX, 10.0, "*").expect("overflow is a result");
        assert!(text.ends_with(" * 10 = inf"), "{text}");
        let text = calculate(-f64::MAX, f64::MAX, "-").expect("overflow is a result");
        assert!(text.ends_with(" = -inf"), "{text}");
    }

    #[test]
    fn deterministic() {
        assert_eq!(calculate(7.0, 2.0, "/").ok(), calculate(7.0, 2.0, "/").ok());
    }
}
