//! FinChat interactive shell.
//!
//! A rustyline REPL over [`SessionContext`]. Commands start with `/`; any
//! other input is a question for the model. The only fatal condition is a
//! missing API key at startup; every per-request failure prints a message
//! and the loop continues.

use anyhow::Result;
use colored::Colorize;
use finchat_application::SessionContext;
use finchat_core::FinchatError;
use finchat_core::onboarding::StepOutcome;
use finchat_core::session::MessageRole;
use finchat_core::workbook::{FlattenMode, flatten};
use finchat_infrastructure::{ConfigStorage, FinchatPaths, JsonAccountRepository, load_workbook};
use finchat_interaction::GeminiApiAgent;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "FinChat - Analizador de Estados Financieros";

const HELP: &str = "\
Comandos disponibles:
  /registrar <correo> <contraseña>   Crea una cuenta nueva
  /login <correo> <contraseña>       Inicia sesión
  /perfil                            Completa el cuestionario de perfil
  /cargar <archivo>                  Carga un archivo Excel (.xlsx, .xls)
  /historial                         Muestra la conversación completa
  /limpiar                           Borra la conversación
  /ayuda                             Muestra esta ayuda
  /salir                             Termina la sesión

Cualquier otro texto se envía como pregunta al asistente.";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match ConfigStorage::new().and_then(|storage| storage.load()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "config.toml unreadable, using defaults");
            Default::default()
        }
    };

    let timeout = Duration::from_secs(config.chat.request_timeout_secs);
    let agent = match GeminiApiAgent::try_from_env(timeout) {
        Ok(agent) => agent,
        Err(FinchatError::ConfigMissing(help)) => {
            eprintln!("{}", help.red());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let accounts_path = FinchatPaths::accounts_file()
        .map_err(|e| anyhow::anyhow!("no se pudo resolver el directorio de datos: {e}"))?;
    let store = Arc::new(JsonAccountRepository::new(accounts_path));

    let mut context = SessionContext::new(store, Arc::new(agent));
    let flatten_mode = if config.chat.verbose_context {
        FlattenMode::Verbose
    } else {
        FlattenMode::Compact
    };

    println!("{}", BANNER.bold());
    println!("{}", "Escribe /ayuda para ver los comandos.".dimmed());

    let mut rl = DefaultEditor::new()?;
    loop {
        let line = match rl.readline("finchat> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(input);

        if input == "/salir" {
            break;
        }

        if let Some(command) = input.strip_prefix('/') {
            handle_command(command, &mut context, &mut rl, flatten_mode);
        } else {
            let reply = context.ask(input).await;
            println!("{} {}", "Asistente:".purple().bold(), reply);
        }
    }

    println!("Hasta pronto.");
    Ok(())
}

fn handle_command(
    command: &str,
    context: &mut SessionContext,
    rl: &mut DefaultEditor,
    flatten_mode: FlattenMode,
) {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match (name, args.as_slice()) {
        ("registrar", [email, password]) => match context.register(email, password) {
            Ok(()) => {
                println!("{}", "Cuenta creada. Completa tu perfil con /perfil.".green());
            }
            Err(e) => print_error(&e),
        },
        ("login", [email, password]) => match context.login(email, password) {
            Ok(()) => println!("{}", "Sesión iniciada.".green()),
            Err(e) => print_error(&e),
        },
        ("perfil", []) => run_onboarding(context, rl),
        ("cargar", [path]) => load_context(context, Path::new(path), flatten_mode),
        ("historial", []) => print_history(context),
        ("limpiar", []) => {
            context.clear_chat();
            println!("Conversación borrada.");
        }
        ("ayuda", []) => println!("{HELP}"),
        _ => println!(
            "{}",
            "Comando no reconocido o argumentos incorrectos. Usa /ayuda.".yellow()
        ),
    }
}

/// Walks the onboarding questionnaire, one question per prompt. Answers are
/// selected by number; an invalid selection repeats the same question.
fn run_onboarding(context: &mut SessionContext, rl: &mut DefaultEditor) {
    let first = context.begin_onboarding();
    println!("{}", first.prompt.bold());
    print_options(first.options);

    loop {
        let line = match rl.readline("perfil> ") {
            Ok(line) => line,
            Err(_) => {
                println!("{}", "Cuestionario interrumpido; tus respuestas previas se conservan.".yellow());
                return;
            }
        };

        let Some(question) = context.onboarding_question() else {
            return;
        };

        let answer = match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= question.options.len() => question.options[n - 1],
            _ => {
                println!("{}", "Elige una opción por su número.".yellow());
                continue;
            }
        };

        match context.submit_onboarding_answer(answer) {
            Ok(StepOutcome::Completed) => {
                println!("{}", "Perfil completado.".green());
                return;
            }
            Ok(StepOutcome::Advanced) => {
                if let Some(next) = context.onboarding_question() {
                    println!("{}", next.prompt.bold());
                    print_options(next.options);
                }
            }
            Err(e) => print_error(&e),
        }
    }
}

fn print_options(options: &[&str]) {
    for (index, option) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, option);
    }
}

fn load_context(context: &mut SessionContext, path: &Path, flatten_mode: FlattenMode) {
    match load_workbook(path) {
        Ok(workbook) => {
            let sheet_count = workbook.sheets.len();
            context.set_workbook_context(flatten(&workbook, flatten_mode));
            println!(
                "{}",
                format!("Archivo cargado ({sheet_count} hojas). ¡Haz tus preguntas!").green()
            );
        }
        Err(e) => {
            // Parse failures are not fatal: the session continues without
            // spreadsheet context.
            print_error(&e);
            println!("{}", "Puedes seguir preguntando sin datos cargados.".dimmed());
        }
    }
}

fn print_history(context: &SessionContext) {
    if context.history().is_empty() {
        println!("No hay conversación todavía.");
        return;
    }
    for turn in context.history() {
        match turn.role {
            MessageRole::User => println!("{} {}", "Tú:".blue().bold(), turn.content),
            MessageRole::Assistant => {
                println!("{} {}", "Asistente:".purple().bold(), turn.content)
            }
        }
    }
}

fn print_error(error: &FinchatError) {
    println!("{}", error.to_string().red());
}
