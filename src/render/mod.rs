//! fish completion script renderer.
//!
//! Serialization is deterministic: global options and subcommands keep the
//! order the parser produced, the guard's command list is sorted, and each
//! subcommand's placeholders are de-duplicated into a sorted set before
//! dynamic rules are emitted.

mod format;
mod target;

pub use target::{ComposeTarget, DockerTarget, Target};

use std::collections::BTreeSet;

use regex::Regex;

use crate::model::{ProgramModel, Subcommand, Switch};
use format::{no_files_marker, quote, switch_clauses};

/// Render the complete completion script for one program model.
pub fn render(model: &ProgramModel, target: &dyn Target) -> String {
    let mut names: Vec<&str> = model
        .subcommands
        .iter()
        .map(|sub| sub.name.as_str())
        .collect();
    names.sort_unstable();

    let mut out = target.header(&names);
    append_global_switches(&mut out, target, &model.global_switches);
    append_subcommands(&mut out, target, &model.subcommands);
    out
}

fn append_global_switches(out: &mut String, target: &dyn Target, switches: &[Switch]) {
    out.push_str("\n# common options\n");
    for switch in switches {
        out.push_str(&format!(
            "complete -c {}{} -n '{}' {}\n",
            target.command(),
            no_files_marker(switch),
            target.guard(),
            switch_clauses(switch)
        ));
    }
}

fn append_subcommands(out: &mut String, target: &dyn Target, subcommands: &[Subcommand]) {
    out.push_str("\n# subcommands\n");
    for sub in subcommands {
        out.push_str(&format!("# {}\n", sub.name));
        out.push_str(&format!(
            "complete -c {} -f -n '{}' -a {} -d {}\n",
            target.command(),
            target.guard(),
            sub.name,
            quote(&sub.description)
        ));
        for switch in &sub.switches {
            out.push_str(&format!(
                "complete -c {} -A{} -n '__fish_seen_subcommand_from {}' {}\n",
                target.command(),
                no_files_marker(switch),
                sub.name,
                switch_clauses(switch)
            ));
        }
        for placeholder in distinct_placeholders(&sub.args) {
            if let Some(rule) = target.argument_rule(sub, &placeholder) {
                out.push_str(&rule);
                out.push('\n');
            }
        }
        out.push('\n');
    }
}

/// Expand usage placeholders into the distinct completable tokens:
/// `[CONTAINER...]` unwraps to `CONTAINER`, `REPOSITORY|IMAGE` splits on
/// the alternation, and duplicates collapse into one sorted set.
fn distinct_placeholders(args: &[String]) -> BTreeSet<String> {
    let repetition =
        Regex::new(r"^\[(.+)\.\.\.\]$").expect("regex for repeated argument placeholders");
    let mut unique = BTreeSet::new();
    for arg in args {
        let inner = match repetition.captures(arg) {
            Some(caps) => caps[1].to_string(),
            None => arg.clone(),
        };
        for part in inner.split('|') {
            if !part.is_empty() {
                unique.insert(part.to_string());
            }
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(shorts: &[&str], longs: &[&str], description: &str) -> Switch {
        Switch {
            shorts: shorts.iter().map(|s| s.to_string()).collect(),
            longs: longs.iter().map(|l| l.to_string()).collect(),
            description: description.to_string(),
            metavar: None,
        }
    }

    fn model(subcommands: Vec<Subcommand>) -> ProgramModel {
        ProgramModel {
            program: "docker".to_string(),
            global_switches: vec![switch(&["v"], &["version"], "Print version and quit")],
            subcommands,
        }
    }

    #[test]
    fn renders_the_ps_scenario_end_to_end() {
        let ps = Subcommand {
            name: "ps".to_string(),
            description: "List containers".to_string(),
            args: Vec::new(),
            switches: vec![switch(&["a"], &["all"], "Show all containers")],
        };
        let script = render(&model(vec![ps]), &DockerTarget);

        assert!(script.contains(
            "complete -c docker -f -n '__fish_docker_no_subcommand' -a ps -d 'List containers'"
        ));
        assert!(script.contains(
            "complete -c docker -A -f -n '__fish_seen_subcommand_from ps' -s a -l all -d 'Show all containers'"
        ));
    }

    #[test]
    fn duplicate_alternation_yields_a_single_rule() {
        let rmi = Subcommand {
            name: "rmi".to_string(),
            description: "Remove one or more images".to_string(),
            args: vec!["IMAGE|IMAGE".to_string(), "[IMAGE...]".to_string()],
            switches: Vec::new(),
        };
        let script = render(&model(vec![rmi]), &DockerTarget);
        let rules = script
            .lines()
            .filter(|line| {
                line.starts_with("complete") && line.contains("__fish_print_docker_images")
            })
            .count();
        assert_eq!(rules, 1);
    }

    #[test]
    fn guard_lists_commands_lexicographically() {
        let subs = ["wait", "ps", "rm"]
            .into_iter()
            .map(|name| Subcommand {
                name: name.to_string(),
                description: String::new(),
                args: Vec::new(),
                switches: Vec::new(),
            })
            .collect();
        let script = render(&model(subs), &DockerTarget);
        assert!(script.contains("if contains -- $i ps rm wait"));
        // Source order is preserved in the body.
        let wait_at = script.find("-a wait").expect("wait registered");
        let ps_at = script.find("-a ps").expect("ps registered");
        assert!(wait_at < ps_at);
    }

    #[test]
    fn file_switch_keeps_path_completion_in_both_positions() {
        let build = Subcommand {
            name: "build".to_string(),
            description: "Build an image".to_string(),
            args: Vec::new(),
            switches: vec![Switch {
                shorts: vec!["f".to_string()],
                longs: vec!["file".to_string()],
                description: "Name of the Dockerfile".to_string(),
                metavar: Some("FILE".to_string()),
            }],
        };
        let mut program = model(vec![build]);
        program.global_switches.push(Switch {
            shorts: vec![],
            longs: vec!["config".to_string()],
            description: "Location of client config file".to_string(),
            metavar: Some("PATH".to_string()),
        });
        let script = render(&program, &DockerTarget);

        assert!(script.contains(
            "complete -c docker -n '__fish_docker_no_subcommand' -l config -d 'Location of client config file'"
        ));
        assert!(script.contains(
            "complete -c docker -A -n '__fish_seen_subcommand_from build' -s f -l file -d 'Name of the Dockerfile'"
        ));
    }

    #[test]
    fn distinct_placeholders_unwrap_and_sort() {
        let args = vec![
            "[CONTAINER...]".to_string(),
            "REPOSITORY|IMAGE".to_string(),
            "IMAGE".to_string(),
        ];
        let tokens: Vec<String> = distinct_placeholders(&args).into_iter().collect();
        assert_eq!(tokens, ["CONTAINER", "IMAGE", "REPOSITORY"]);
    }

    #[test]
    fn unrecognized_placeholders_render_no_rule() {
        let port = Subcommand {
            name: "port".to_string(),
            description: "Lookup the public-facing port".to_string(),
            args: vec!["PRIVATE_PORT".to_string()],
            switches: Vec::new(),
        };
        let script = render(&model(vec![port]), &DockerTarget);
        assert!(!script.contains("PRIVATE_PORT"));
    }
}
