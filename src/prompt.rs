//! Interactive terminal version of the sign-up form.

use anyhow::Result;
use derive_more::Display;
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use log::warn;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use signup_form::models::{FileSelection, RawFormInput, RawKnowledge, RawTech, SelectedFile};

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns `None` when the menu is done,
/// or `Some(())` to be shown again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it exits. Errors are reported and the menu is
    /// shown again, except when the user aborts the prompt.
    fn enter_loop(&mut self) -> Result<()> {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                if is_abort(&error) {
                    return Err(error);
                }
                eprintln!("Erro: {error}");
            }
        }
        Ok(())
    }
}

fn is_abort(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

/// Asks every field of the form, pre-filled with the previous attempt
pub fn fill_form(previous: &RawFormInput) -> Result<RawFormInput> {
    let avatar = prompt_avatar(&previous.avatar)?;

    let name = Text::new("Nome:")
        .with_initial_value(&previous.name)
        .prompt()?;

    let email = Text::new("E-mail:")
        .with_initial_value(&previous.email)
        .prompt()?;

    let password = Password::new("Senha:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let mut techs = TechsMenu {
        techs: previous.techs.clone(),
    };
    techs.enter_loop()?;

    Ok(RawFormInput {
        avatar,
        name,
        email,
        password,
        techs: techs.techs,
    })
}

/// Asks whether the user wants to fix a rejected submission
pub fn retry() -> Result<bool> {
    Ok(Confirm::new("Corrigir e enviar novamente?")
        .with_default(true)
        .prompt()?)
}

fn prompt_avatar(previous: &FileSelection) -> Result<FileSelection> {
    if let [file] = previous.files() {
        let keep = Confirm::new(&format!("Manter o avatar {file}?"))
            .with_default(true)
            .prompt()?;
        if keep {
            return Ok(previous.clone());
        }
    }

    loop {
        let path = Text::new("Avatar (caminho do arquivo):")
            .with_help_message("Deixe vazio para não enviar um avatar")
            .prompt()?;

        if path.trim().is_empty() {
            return Ok(FileSelection::default());
        }

        match SelectedFile::from_path(path.trim()) {
            Ok(file) => return Ok(FileSelection::single(file)),
            Err(error) => {
                warn!("Avatar selection failed: {error:#}");
                eprintln!("Erro: {error}");
            }
        }
    }
}

/// Editor for the technologies list
struct TechsMenu {
    techs: Vec<RawTech>,
}

impl Menu for TechsMenu {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Adicionar tecnologia")]
            Add,
            #[display("Remover tecnologia")]
            Remove,
            #[display("Salvar")]
            Save,
        }

        println!("Tecnologias:");
        if self.techs.is_empty() {
            println!("  (nenhuma)");
        }
        for (index, tech) in self.techs.iter().enumerate() {
            println!("  {index}. {tech}");
        }

        let choice = Select::new("O que deseja fazer?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Add => {
                let title = Text::new("Título:").prompt()?;
                let knowledge = Text::new("Conhecimento (1-100):").prompt()?;

                self.techs.push(RawTech {
                    title,
                    knowledge: RawKnowledge::Text(knowledge),
                });
            }

            Choice::Remove => {
                if self.techs.is_empty() {
                    println!("[!] Nenhuma tecnologia para remover");
                    return Ok(MENU_LOOP);
                }

                // Escape goes back to the menu without removing anything
                let selected = match Select::new("Qual tecnologia?", self.techs.clone()).raw_prompt() {
                    Ok(selected) => selected,
                    Err(InquireError::OperationCanceled) => return Ok(MENU_LOOP),
                    Err(error) => return Err(error.into()),
                };
                self.techs.remove(selected.index);
            }

            Choice::Save => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_user_aborts_leave_the_menu() {
        assert!(is_abort(&InquireError::OperationCanceled.into()));
        assert!(is_abort(&InquireError::OperationInterrupted.into()));

        assert!(!is_abort(&InquireError::NotTTY.into()));
        assert!(!is_abort(&anyhow::anyhow!("Avatar não encontrado")));
    }
}
