//! Entry point: fills the sign-up form either from a JSON file given as the
//! first argument, or interactively, then prints the accepted user as JSON.

mod prompt;

use std::{env, fs::File, io::BufReader, path::Path};

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use log::info;

use signup_form::{
    config::Settings,
    form::validate,
    models::RawFormInput,
    output::{render_errors, render_user},
};

fn main() -> Result<()> {
    dotenv().ok();
    let settings = Settings::from_env()?;
    env_logger::builder()
        .filter_level(settings.log_level)
        .init();

    match env::args_os().nth(1) {
        Some(path) => run_from_file(Path::new(&path), &settings),
        None => run_interactive(&settings),
    }
}

/// Reads a raw submission from a JSON file
fn load_form_input(path: &Path) -> Result<RawFormInput> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open form input {}", path.display()))?;
    let raw = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Malformed form input in {}", path.display()))?;
    info!("Loaded form input from {}", path.display());
    Ok(raw)
}

/// Validates a single submission read from a JSON file.
/// A rejected form is an error, so the process exits with status 1.
fn run_from_file(path: &Path, settings: &Settings) -> Result<()> {
    match validate(load_form_input(path)?) {
        Ok(user) => {
            println!("{}", render_user(&user, settings.pretty_output)?);
            Ok(())
        }
        Err(errors) => {
            eprint!("{}", render_errors(&errors));
            bail!("Form rejected with {} error(s)", errors.len())
        }
    }
}

/// Asks for the form until it is accepted or the user gives up
fn run_interactive(settings: &Settings) -> Result<()> {
    let mut input = RawFormInput::default();

    loop {
        input = prompt::fill_form(&input)?;

        match validate(input.clone()) {
            Ok(user) => {
                println!("{}", render_user(&user, settings.pretty_output)?);
                return Ok(());
            }
            Err(errors) => {
                eprintln!();
                eprint!("{}", render_errors(&errors));
                if !prompt::retry()? {
                    bail!("Form rejected with {} error(s)", errors.len());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn demo(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
    }

    #[test]
    fn test_accepted_file() {
        assert!(run_from_file(&demo("submission.json"), &Settings::default()).is_ok());

        let user = validate(load_form_input(&demo("submission.json")).unwrap()).unwrap();
        assert_eq!(user.name().as_str(), "Ana Maria");
        assert_eq!(user.email().as_str(), "ana@email.com.br");
        assert_eq!(user.techs().len(), 2);
    }

    #[test]
    fn test_rejected_file() {
        let result = run_from_file(&demo("rejected.json"), &Settings::default());
        assert!(result.is_err(), "Rejected form was reported as a success");

        let errors = validate(load_form_input(&demo("rejected.json")).unwrap()).unwrap_err();
        for path in ["avatar", "name", "email", "password", "techs", "techs.0.title", "techs.0.knowledge"] {
            assert!(errors.contains(path), "Missing error at {}", path);
        }
    }

    #[test]
    fn test_unreadable_files() {
        assert!(run_from_file(&demo("does_not_exist.json"), &Settings::default()).is_err());

        let malformed = std::env::temp_dir().join(format!("{}_malformed.json", std::process::id()));
        fs::write(&malformed, "{ \"name\": ").expect("Failed to create test file");
        let result = load_form_input(&malformed);
        fs::remove_file(&malformed).ok();

        assert!(result.is_err(), "Malformed JSON was accepted");
    }
}
