use anyhow::Result;
use rebatch_core::{undo_operation, OutputFormat};

pub fn handle_undo(store_id: &str, output: OutputFormat, use_color: bool) -> Result<()> {
    let result = undo_operation(None, Some(store_id))?;
    print!("{}", result.render(output, use_color)?);
    Ok(())
}
