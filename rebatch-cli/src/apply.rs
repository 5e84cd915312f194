use anyhow::Result;
use rebatch_core::{plan_operation, rename_operation, OutputFormat};
use std::io::{self, Write};

pub fn handle_apply(
    pattern: &str,
    action: &str,
    parameter: &str,
    store_id: &str,
    output: OutputFormat,
    use_color: bool,
    yes: bool,
) -> Result<()> {
    // Preview before touching anything.
    let preview = plan_operation(pattern, action, parameter, None)?;
    if preview.outcomes.is_empty() {
        print!("{}", preview.render(output, use_color)?);
        return Ok(());
    }
    if output == OutputFormat::Human {
        print!("{}", preview.render(output, use_color)?);
    }

    if !yes {
        print!("Apply these renames? [y/N]: ");
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = rename_operation(pattern, action, parameter, None, Some(store_id))?;
    print!("{}", result.render(output, use_color)?);
    Ok(())
}
