use crate::output::{print_json, print_table};
use actionkey_core::{define_action, Subactions};

pub fn run(
    action_type: &str,
    subactions: Vec<String>,
    namespace: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let subactions = if subactions.is_empty() {
        Subactions::None
    } else {
        Subactions::List(subactions)
    };
    let token = define_action(action_type, subactions, namespace)?;
    tracing::debug!(name = token.name(), subactions = token.len(), "defined action");

    if json {
        return print_json(&token);
    }

    println!("{token}");
    if token.is_empty() {
        return Ok(());
    }

    println!();
    let rows: Vec<Vec<String>> = token
        .subactions()
        .map(|(suffix, key)| vec![suffix.to_string(), key.to_string()])
        .collect();
    print_table(&["SUBACTION", "KEY"], &rows);
    Ok(())
}
