use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use faq_client::{ApiClient, BannerKind, FaqBackend, FaqController, DEFAULT_SERVER_URL};
use shared_types::FaqRecord;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "faq", version, about = "Manage FAQ entries on a faq-api server")]
struct Cli {
    /// Base URL of the faq-api server
    #[arg(long, env = "FAQ_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List FAQs, optionally filtered by a search term
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one FAQ with its timestamps
    Show { id: String },
    /// Add a new FAQ
    Add {
        #[arg(short, long)]
        question: String,
        #[arg(short, long)]
        answer: String,
    },
    /// Edit an existing FAQ; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(short, long)]
        question: Option<String>,
        #[arg(short, long)]
        answer: Option<String>,
    },
    /// Delete a FAQ after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Check that the server is up
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(cli.server);

    let mut controller = FaqController::new(client);
    if !matches!(cli.command, Command::Health) && controller.load().await.is_err() {
        report_banner(&controller);
        bail!("Could not load FAQs from {}", controller.backend().base_url());
    }

    let outcome = run(&mut controller, cli.command).await;
    report_banner(&controller);
    outcome
}

async fn run(controller: &mut FaqController<ApiClient>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { search } => {
            if let Some(term) = search {
                controller.set_search(term);
            }
            let visible = controller.visible();
            if visible.is_empty() {
                println!("No FAQs found.");
            }
            for faq in visible {
                println!("{:<24} {}", faq.id, faq.question);
            }
        }
        Command::Show { id } => {
            let faq = controller.backend().get(&id).await?;
            print_faq(&faq);
        }
        Command::Add { question, answer } => {
            controller.open_create();
            let form = controller.form_mut();
            form.question = question;
            form.answer = answer;
            let faq = controller.submit().await?;
            println!("{}", faq.id);
        }
        Command::Edit {
            id,
            question,
            answer,
        } => {
            controller.open_edit(&id)?;
            let form = controller.form_mut();
            if let Some(question) = question {
                form.question = question;
            }
            if let Some(answer) = answer {
                form.answer = answer;
            }
            let faq = controller.submit().await?;
            print_faq(&faq);
        }
        Command::Delete { id, yes } => {
            let question = controller.request_delete(&id)?.question.clone();
            if !yes && !confirm(&format!("Delete \"{question}\"?"))? {
                controller.close_dialogs();
                println!("Cancelled.");
                return Ok(());
            }
            controller.confirm_delete().await?;
        }
        Command::Health => {
            let client = controller.backend();
            let status = client
                .health()
                .await
                .with_context(|| format!("Server at {} is not healthy", client.base_url()))?;
            println!(
                "{} v{} up {}s, {} FAQ(s)",
                status.status, status.version, status.uptime, status.faq_count
            );
        }
    }

    Ok(())
}

fn print_faq(faq: &FaqRecord) {
    println!("Q: {}", faq.question);
    println!("A: {}", faq.answer);
    println!("Created: {}", faq.created_at.format("%Y-%m-%d %H:%M"));
    if faq.was_edited() {
        println!("Updated: {}", faq.updated_at.format("%Y-%m-%d %H:%M"));
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn report_banner<B: FaqBackend>(controller: &FaqController<B>) {
    if let Some(banner) = controller.banner() {
        match banner.kind {
            BannerKind::Success => eprintln!("{}", banner.message),
            BannerKind::Error => eprintln!("error: {}", banner.message),
        }
    }
}
