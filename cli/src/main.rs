use anyhow::Context;
use checklist_core::{
    parse_selection, Checklist, IntakeForm, Insurance, Language, Recommendation, SymptomId,
    CATALOG,
};
use checklist_gemini::{GeneratorConfig, ScriptGenerator};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "checklist",
    about = "Symptom checklist, recommendation and doctor-script generator."
)]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the symptom catalog.
    Catalog,
    /// Classify a selection and show the recommendation.
    Check(Selection),
    /// Compose a script from the offline templates.
    Script(Selection),
    /// Build the "Email Me This List" link.
    Mailto(Selection),
    /// Ask Gemini for a script (falls back to a fixed script on any failure).
    Generate {
        #[command(flatten)]
        selection: Selection,
        /// Gemini API key.
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Model name, e.g. gemini-2.5-flash.
        #[arg(long)]
        model: Option<String>,
    },
    /// Validate an appointment request prefilled from the selection.
    Intake {
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        name: String,
        /// Date of birth, YYYY-MM-DD.
        #[arg(long)]
        dob: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        /// Private, Medicare, Medicaid, Self-Pay or Other.
        #[arg(long)]
        insurance: Option<String>,
        #[arg(long, default_value = "English")]
        language: String,
    },
}

#[derive(Args, Debug)]
struct Selection {
    /// Symptom keys (see `catalog`), e.g. `itching bleeding`.
    symptoms: Vec<String>,
}

impl Selection {
    fn checklist(&self) -> anyhow::Result<Checklist> {
        let ids = parse_selection(&self.symptoms).context("invalid symptom selection")?;
        let mut checklist = Checklist::new();
        for id in ids {
            checklist.toggle(id);
        }
        Ok(checklist)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Catalog => print_catalog(cli.json)?,
        Command::Check(selection) => {
            let checklist = selection.checklist()?;
            print_assessment(&checklist, cli.json)?;
        }
        Command::Script(selection) => {
            let checklist = selection.checklist()?;
            println!("{}", checklist.template_script());
        }
        Command::Mailto(selection) => {
            let checklist = selection.checklist()?;
            println!("{}", checklist.mailto_link());
        }
        Command::Generate {
            selection,
            api_key,
            model,
        } => {
            let checklist = selection.checklist()?;
            let mut config = GeneratorConfig::from_env();
            if let Some(key) = api_key {
                config.api_key = Some(key);
            }
            if let Some(model) = model {
                config.model = model;
            }
            let generator = ScriptGenerator::gemini(config);
            tracing::info!(
                model = %generator.backend().config().model,
                symptoms = checklist.selection().len(),
                "generating script"
            );
            println!("{}", generator.generate(&checklist.selected_labels()).await);
        }
        Command::Intake {
            selection,
            name,
            dob,
            phone,
            email,
            insurance,
            language,
        } => {
            let checklist = selection.checklist()?;
            let mut form = IntakeForm::prefilled(&checklist.selected_labels());
            form.name = name;
            form.date_of_birth = dob;
            form.phone = phone;
            form.email = email;
            form.insurance = match insurance {
                Some(value) => Some(
                    Insurance::from_value(&value)
                        .with_context(|| format!("unknown insurance type {value:?}"))?,
                ),
                None => None,
            };
            form.language = Language::from_label(&language)
                .with_context(|| format!("unknown language {language:?}"))?;

            form.validate().context("appointment request is incomplete")?;
            print_intake(&form, cli.json)?;
        }
    }

    Ok(())
}

fn print_catalog(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CATALOG)?);
        return Ok(());
    }
    for definition in CATALOG.iter() {
        let category = if definition.id.is_critical() {
            "critical"
        } else {
            "minor"
        };
        println!("{:<10} {:<9} {}", definition.key, category, definition.label);
    }
    Ok(())
}

fn print_assessment(checklist: &Checklist, json: bool) -> anyhow::Result<()> {
    let recommendation = checklist.recommendation();
    if json {
        let value = serde_json::json!({
            "selection": checklist.selection(),
            "status": checklist.status(),
            "critical_clause": checklist.critical_clause(),
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let labels: Vec<&str> = checklist
        .selection()
        .into_iter()
        .map(SymptomId::label)
        .collect();
    let selected = if labels.is_empty() {
        "--".to_string()
    } else {
        labels.join("; ")
    };
    println!("Selected: {selected}");
    println!("Status: {:?}", checklist.status());
    match recommendation {
        Some(Recommendation {
            title,
            message,
            action_label,
            ..
        }) => println!("{title}: {message}\nNext step: {action_label}"),
        None => println!("Nothing checked yet."),
    }
    Ok(())
}

fn print_intake(form: &IntakeForm, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(form)?);
        return Ok(());
    }
    println!(
        "Request ready for {}\nA scheduler will contact you at {} within 24 hours.",
        form.name, form.phone
    );
    if !form.notes.is_empty() {
        println!("Notes: {}", form.notes);
    }
    Ok(())
}
