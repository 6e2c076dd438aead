//! fish statement formatting helpers.

use crate::model::Switch;

/// Single-quote `text` for fish, escaping backslashes and quotes.
pub(super) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Alias and description clauses for one switch:
/// `-s a -l all -d 'Show all containers'`.
pub(super) fn switch_clauses(switch: &Switch) -> String {
    let mut parts = Vec::with_capacity(switch.shorts.len() + switch.longs.len() + 1);
    for short in &switch.shorts {
        parts.push(format!("-s {short}"));
    }
    for long in &switch.longs {
        parts.push(format!("-l {long}"));
    }
    parts.push(format!("-d {}", quote(&switch.description)));
    parts.join(" ")
}

/// `-f` marker suppressing fish's file completion, omitted for switches
/// whose argument is a filesystem path.
pub(super) fn no_files_marker(switch: &Switch) -> &'static str {
    if switch.takes_file_argument() {
        ""
    } else {
        " -f"
    }
}

/// Guard function that holds while no known subcommand has been typed yet;
/// `commands` must already be in the order the guard should list them.
pub(super) fn guard_function(guard: &str, program: &str, commands: &[&str]) -> String {
    format!(
        "function {guard} --description 'Test if {program} has yet to be given the subcommand'\n\
        \x20   for i in (commandline -opc)\n\
        \x20       if contains -- $i {names}\n\
        \x20           return 1\n\
        \x20       end\n\
        \x20   end\n\
        \x20   return 0\n\
        end\n",
        names = commands.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of [`quote`], for round-trip checks only.
    fn unquote(quoted: &str) -> String {
        let inner = quoted
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
            .expect("quoted form is wrapped in single quotes");
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                out.push(chars.next().expect("escape is followed by a character"));
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn quoting_round_trips_descriptions() {
        for description in [
            "Show all containers",
            "Don't truncate output",
            "Path with \\ backslash",
            "",
        ] {
            assert_eq!(unquote(&quote(description)), description);
        }
    }

    #[test]
    fn clauses_list_every_alias() {
        let switch = Switch {
            shorts: vec!["a".to_string()],
            longs: vec!["all".to_string()],
            description: "Show all containers".to_string(),
            metavar: None,
        };
        assert_eq!(
            switch_clauses(&switch),
            "-s a -l all -d 'Show all containers'"
        );
    }

    #[test]
    fn file_switches_keep_path_completion() {
        let file = Switch {
            shorts: vec![],
            longs: vec!["config".to_string()],
            description: "Config file".to_string(),
            metavar: Some("FILE".to_string()),
        };
        let plain = Switch {
            shorts: vec![],
            longs: vec!["name".to_string()],
            description: "Assign a name".to_string(),
            metavar: Some("NAME".to_string()),
        };
        assert_eq!(no_files_marker(&file), "");
        assert_eq!(no_files_marker(&plain), " -f");
    }
}
