//! Interactive first-run configuration wizard.
//!
//! Walks the operator through a fixed sequence of prompts: choosing a Git
//! service, entering its URL, supplying an access token, then searching for
//! and selecting the project to work on. Every answer is validated against
//! the live service before the wizard advances; invalid answers reprompt the
//! same step, and the reserved word `quit` (or closing the input stream)
//! cancels the whole run without writing anything.
//!
//! Nothing is persisted until every step has succeeded. A completed run
//! writes two files: the user token store in the home directory, then the
//! project config in the current directory. The two writes are not atomic; a
//! failure between them leaves a saved token with no project config.

use crate::core::{
    config::{CredentialStore, ProjectConfig},
    error::{GitIssuesError, Result},
    output::{print_error, print_info, print_section_header, print_success},
    prompt::{PromptInput, PromptSource, StdinPrompt},
    provider::{GitProvider, ProjectMatch, ProviderKind},
    remote::{HttpChecker, RemoteCheck, RemoteResponse},
};
use colored::*;
use std::env;
use std::path::Path;

/// How an `init` run ended
#[derive(Debug, PartialEq)]
pub enum InitOutcome {
    Configured,
    Cancelled,
}

/// Run the configuration wizard in the current directory.
///
/// Fails fast when the directory is not a git project root or already holds
/// a config file. Cancellation is reported as [`InitOutcome::Cancelled`] so
/// the caller decides how the process ends.
pub fn execute_init() -> Result<InitOutcome> {
    let current_dir = env::current_dir()?;
    ensure_git_repository(&current_dir)?;
    ensure_not_configured(&current_dir)?;

    print_banner();

    match run_wizard(&HttpChecker, &mut StdinPrompt)? {
        Some((config, token)) => {
            let token_path = CredentialStore::save(config.git_service, &token)?;
            log::debug!("Token saved to {}", token_path.display());

            let config_path = config.save_in(&current_dir)?;
            print_success(&format!(
                "You are now set to work on {}.",
                config.project_slug
            ));
            print_info(&format!(
                "Your configuration has been saved to {}, enjoy!",
                config_path.display()
            ));
            Ok(InitOutcome::Configured)
        }
        None => Ok(InitOutcome::Cancelled),
    }
}

/// Drive the ordered steps, accumulating answers until the config is
/// complete.
///
/// Returns `None` as soon as any step is cancelled. The remote validator and
/// input source are parameters so tests can script a whole run.
fn run_wizard<C: RemoteCheck, P: PromptSource>(
    checker: &C,
    prompt: &mut P,
) -> Result<Option<(ProjectConfig, String)>> {
    let service = match select_git_service(prompt)? {
        Some(service) => service,
        None => return Ok(None),
    };
    let provider = service.provider();

    let url = match enter_base_url(checker, prompt, provider)? {
        Some(url) => url,
        None => return Ok(None),
    };

    let token = match enter_token(checker, prompt, provider, &url)? {
        Some(token) => token,
        None => return Ok(None),
    };

    let project = match choose_project(checker, prompt, provider, &url, &token)? {
        Some(project) => project,
        None => return Ok(None),
    };

    Ok(Some((
        ProjectConfig {
            git_service: service,
            url,
            project_id: project.id,
            project_slug: project.path_with_namespace,
        },
        token,
    )))
}

/// Check that the current directory is a git project root
fn ensure_git_repository(dir: &Path) -> Result<()> {
    git2::Repository::open(dir).map_err(|_| GitIssuesError::NotInGitRepo)?;
    Ok(())
}

/// Check that the project has not been configured before
fn ensure_not_configured(dir: &Path) -> Result<()> {
    if ProjectConfig::exists_in(dir) {
        return Err(GitIssuesError::AlreadyConfigured);
    }
    Ok(())
}

fn print_banner() {
    println!("\n{}", "####################################################".bright_black());
    println!("{}", "##      Welcome to git-issues configuration       ##".white());
    println!("{}", "####################################################".bright_black());
}

/// Step 1: pick the Git service from a numbered menu
fn select_git_service<P: PromptSource>(prompt: &mut P) -> Result<Option<ProviderKind>> {
    let services = ProviderKind::all();

    loop {
        print_section_header("Please insert the number of the used Git service");
        for (index, service) in services.iter().enumerate() {
            println!(
                "{}{}{} {}",
                "[".bright_black(),
                (index + 1).to_string().white(),
                "]".bright_black(),
                service.provider().display_name().blue()
            );
        }
        println!("{}", "... more services soon ...".bright_black());
        print!("\n{} ", "Enter selection:".blue());

        match prompt.read_line()? {
            PromptInput::Cancelled => return Ok(None),
            PromptInput::Line(input) => match parse_selection(&input, services.len()) {
                Some(index) => {
                    let service = services[index - 1];
                    log::debug!("Selected Git service: {}", service.provider().display_name());
                    return Ok(Some(service));
                }
                None => print_error("Sorry, the option is out of range. Try again"),
            },
        }
    }
}

/// Step 2: read the service URL and check the host answers at all
fn enter_base_url<C: RemoteCheck, P: PromptSource>(
    checker: &C,
    prompt: &mut P,
    provider: &dyn GitProvider,
) -> Result<Option<String>> {
    loop {
        print_section_header(&format!("Please enter your {} url", provider.display_name()));
        println!("{}", "example: http://gitlab.example.com".bright_black());
        print!("\n{} ", "Url:".blue());

        match prompt.read_line()? {
            PromptInput::Cancelled => return Ok(None),
            PromptInput::Line(input) => {
                let url = normalize_scheme(&input);
                // Any answer from the host will do here; the token step is
                // where the API itself gets exercised
                match checker.check(&url, &[]) {
                    Ok(_) => {
                        log::debug!("Service url accepted: {url}");
                        return Ok(Some(url));
                    }
                    Err(e) => {
                        log::debug!("Url check failed: {e}");
                        print_error("Oops, seems to be a bad url. Try again or quit (quit)");
                    }
                }
            }
        }
    }
}

/// Step 3: read the access token and check it against the project listing
/// route
fn enter_token<C: RemoteCheck, P: PromptSource>(
    checker: &C,
    prompt: &mut P,
    provider: &dyn GitProvider,
    base_url: &str,
) -> Result<Option<String>> {
    let routes = provider.routes(base_url, None);

    loop {
        print_section_header(&format!(
            "Please enter your {} token",
            provider.display_name()
        ));
        println!(
            "{}",
            "(use `git-issues --help` to check how to get your token)".bright_black()
        );
        print!("\n{} ", "Token:".blue());

        match prompt.read_line()? {
            PromptInput::Cancelled => return Ok(None),
            PromptInput::Line(token) => {
                if authorized_check(checker, &routes.projects, provider, &token).is_some() {
                    log::debug!("Token accepted");
                    return Ok(Some(token));
                }
                print_error("Oops, seems to be an invalid token. Try again or quit (quit)");
            }
        }
    }
}

/// Steps 4 and 5: search for the project by name, then pick one match
fn choose_project<C: RemoteCheck, P: PromptSource>(
    checker: &C,
    prompt: &mut P,
    provider: &dyn GitProvider,
    base_url: &str,
    token: &str,
) -> Result<Option<ProjectMatch>> {
    let routes = provider.routes(base_url, None);

    loop {
        print_section_header("Please enter the name of the current project");
        print!("\n{} ", "Project name:".blue());

        let query = match prompt.read_line()? {
            PromptInput::Cancelled => return Ok(None),
            PromptInput::Line(query) => query,
        };

        let url = format!("{}{}", routes.search_projects, query);
        let matches = match authorized_check(checker, &url, provider, token) {
            Some(response) => provider.project_matches(&response.body),
            None => Vec::new(),
        };

        if matches.is_empty() {
            print_error(&format!(
                "Oops, we couldn't find a project called {query}. Try again or quit (quit)"
            ));
            continue;
        }

        print_info(&format!("Found {} match(es)", matches.len()));
        for (index, project) in matches.iter().enumerate() {
            println!(
                "{}{}{} {}",
                "[".bright_black(),
                (index + 1).to_string().white(),
                "]".bright_black(),
                project.name_with_namespace.blue()
            );
        }

        return select_project(prompt, &matches);
    }
}

/// Pick one match by its 1-based number, reprompting on bad input
fn select_project<P: PromptSource>(
    prompt: &mut P,
    matches: &[ProjectMatch],
) -> Result<Option<ProjectMatch>> {
    loop {
        print!(
            "\n{} ",
            format!("Enter selection (1-{}):", matches.len()).blue()
        );

        match prompt.read_line()? {
            PromptInput::Cancelled => return Ok(None),
            PromptInput::Line(input) => match parse_selection(&input, matches.len()) {
                Some(index) => return Ok(Some(matches[index - 1].clone())),
                None => print_error("Sorry, the option is out of range. Try again"),
            },
        }
    }
}

/// One authenticated GET, collapsed to pass/fail.
///
/// An unreachable service and a rejected token look the same to the wizard:
/// both reprompt the current step.
fn authorized_check<C: RemoteCheck>(
    checker: &C,
    url: &str,
    provider: &dyn GitProvider,
    token: &str,
) -> Option<RemoteResponse> {
    match checker.check(url, &[(provider.auth_header(), token)]) {
        Ok(response) if response.is_success() => Some(response),
        Ok(response) => {
            log::debug!("Check of {url} answered with status {}", response.status);
            None
        }
        Err(e) => {
            log::debug!("Check of {url} failed: {e}");
            None
        }
    }
}

/// Force a scheme onto URLs typed without one
fn normalize_scheme(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

/// Parse a 1-based menu selection, rejecting anything outside `[1, max]`
fn parse_selection(input: &str, max: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|index| (1..=max).contains(index))
}
