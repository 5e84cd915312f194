use anyhow::Result;
use rebatch_core::{plan_operation, OutputFormat};

pub fn handle_plan(
    pattern: &str,
    action: &str,
    parameter: &str,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let result = plan_operation(pattern, action, parameter, None)?;
    print!("{}", result.render(output, use_color)?);
    Ok(())
}
