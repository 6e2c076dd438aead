//! Target-program variants of the completion renderer.
//!
//! The two targets differ only in header boilerplate and in which
//! placeholder categories get dynamic argument rules: docker enumerates
//! containers, images, and repositories; compose enumerates services.

use crate::model::Subcommand;

use super::format::{guard_function, quote};

/// Container liveness filter passed to the containers helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerFilter {
    Running,
    Stopped,
    All,
}

impl ContainerFilter {
    pub fn keyword(self) -> &'static str {
        match self {
            ContainerFilter::Running => "running",
            ContainerFilter::Stopped => "stopped",
            ContainerFilter::All => "all",
        }
    }

    /// Which containers a subcommand can meaningfully act on: `start` and
    /// `rm` take stopped containers, a few read-only commands take any,
    /// everything else takes running ones.
    pub fn for_subcommand(name: &str) -> Self {
        match name {
            "start" | "rm" => ContainerFilter::Stopped,
            "commit" | "diff" | "export" | "inspect" => ContainerFilter::All,
            _ => ContainerFilter::Running,
        }
    }
}

/// One target program's completion dialect.
pub trait Target {
    /// Name completions are registered under (`complete -c <name>`).
    fn command(&self) -> &'static str;

    /// Guard function gating top-level subcommand completion.
    fn guard(&self) -> &'static str;

    /// Static prologue: the guard predicate over `commands` plus the
    /// helper functions used by dynamic argument rules.
    fn header(&self, commands: &[&str]) -> String;

    /// Dynamic completion rule for one positional placeholder, if the
    /// placeholder names a resource the target can enumerate.
    fn argument_rule(&self, subcommand: &Subcommand, placeholder: &str) -> Option<String>;
}

pub struct DockerTarget;

const DOCKER_HELPERS: &str = r#"function __fish_print_docker_containers --description 'Print a list of docker containers' -a select
    switch $select
        case running
            docker ps -a --no-trunc | awk 'NR>1' | awk 'BEGIN {FS="  +"}; $5 ~ "^Up" {print $1 "\n" $(NF-1)}' | tr ',' '\n'
        case stopped
            docker ps -a --no-trunc | awk 'NR>1' | awk 'BEGIN {FS="  +"}; $5 ~ "^Exit" {print $1 "\n" $(NF-1)}' | tr ',' '\n'
        case all
            docker ps -a --no-trunc | awk 'NR>1' | awk 'BEGIN {FS="  +"}; {print $1 "\n" $(NF-1)}' | tr ',' '\n'
    end
end

function __fish_print_docker_images --description 'Print a list of docker images'
    docker images | awk 'NR>1' | grep -v '<none>' | awk '{print $1":"$2}'
end

function __fish_print_docker_repositories --description 'Print a list of docker repositories'
    docker images | awk 'NR>1' | grep -v '<none>' | awk '{print $1}' | sort | uniq
end
"#;

impl Target for DockerTarget {
    fn command(&self) -> &'static str {
        "docker"
    }

    fn guard(&self) -> &'static str {
        "__fish_docker_no_subcommand"
    }

    fn header(&self, commands: &[&str]) -> String {
        let mut out = String::new();
        out.push_str("# docker.fish - docker completions for fish shell\n\n");
        out.push_str(&guard_function(self.guard(), self.command(), commands));
        out.push('\n');
        out.push_str(DOCKER_HELPERS);
        out
    }

    fn argument_rule(&self, subcommand: &Subcommand, placeholder: &str) -> Option<String> {
        let (helper, label) = match placeholder {
            "CONTAINER" => {
                let filter = ContainerFilter::for_subcommand(&subcommand.name);
                (
                    format!("(__fish_print_docker_containers {})", filter.keyword()),
                    "Container",
                )
            }
            "IMAGE" => ("(__fish_print_docker_images)".to_string(), "Image"),
            "REPOSITORY" => ("(__fish_print_docker_repositories)".to_string(), "Repository"),
            _ => return None,
        };
        Some(format!(
            "complete -c {} -A -f -n '__fish_seen_subcommand_from {}' -a '{}' -d {}",
            self.command(),
            subcommand.name,
            helper,
            quote(label)
        ))
    }
}

pub struct ComposeTarget;

const COMPOSE_HELPERS: &str = r#"function __fish_print_docker_compose_services --description 'Print a list of docker-compose services'
    docker-compose config --services 2>/dev/null
end
"#;

impl Target for ComposeTarget {
    fn command(&self) -> &'static str {
        "docker-compose"
    }

    fn guard(&self) -> &'static str {
        "__fish_docker_compose_no_subcommand"
    }

    fn header(&self, commands: &[&str]) -> String {
        let mut out = String::new();
        out.push_str("# docker-compose.fish - docker-compose completions for fish shell\n\n");
        out.push_str(&guard_function(self.guard(), self.command(), commands));
        out.push('\n');
        out.push_str(COMPOSE_HELPERS);
        out
    }

    fn argument_rule(&self, subcommand: &Subcommand, placeholder: &str) -> Option<String> {
        if placeholder != "SERVICE" {
            return None;
        }
        Some(format!(
            "complete -c {} -A -f -n '__fish_seen_subcommand_from {}' -a '(__fish_print_docker_compose_services)' -d {}",
            self.command(),
            subcommand.name,
            quote("Service")
        ))
    }
}
