use std::{fs, path::PathBuf};

use alumni_lib::{
    Error, Repository, Result, export,
    form::ProfileForm,
    repository::{Gender, ProfileId, SocialChannel, seed::is_predefined_area},
    search::{FilterState, visible_profiles},
};
use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::{error, warn};

use crate::output;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List profiles matching the saved filters, optionally overridden
    List(ListArgs),
    /// Show every section of a profile
    Show { id: String },
    /// Add a new profile. Areas are normally one of `alumni areas --predefined`
    Add(AddArgs),
    /// Export a profile as JSON
    Export {
        id: String,
        /// Directory the JSON file is written to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Copy the JSON to the clipboard instead of writing a file
        #[arg(short, long)]
        clipboard: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Free-text search over name, position, company and description
    #[arg(short, long)]
    search: Option<String>,
    #[arg(short, long)]
    gender: Option<Gender>,
    #[arg(short, long)]
    area: Option<String>,
    #[arg(short, long)]
    year: Option<String>,
    /// Ignore the saved filters
    #[arg(long)]
    all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// TOML file with the whole form; the other flags take precedence over it
    #[arg(long)]
    form: Option<PathBuf>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Photo URL; a placeholder matching the gender is used when omitted
    #[arg(long)]
    photo: Option<String>,
    #[arg(long)]
    gender: Option<Gender>,
    #[arg(long)]
    area: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    location: Option<String>,
    /// Social link as CHANNEL=URL, e.g. github=https://github.com/ana
    #[arg(long = "link", value_parser = parse_link)]
    links: Vec<(SocialChannel, String)>,
    #[arg(long = "skill")]
    skills: Vec<String>,
    #[arg(long = "interest")]
    interests: Vec<String>,
    #[arg(long = "achievement")]
    achievements: Vec<String>,
}

fn parse_link(value: &str) -> std::result::Result<(SocialChannel, String), String> {
    let (channel, url) = value
        .split_once('=')
        .ok_or_else(|| format!("expected CHANNEL=URL, got '{value}'"))?;
    let channel = channel
        .trim()
        .parse()
        .map_err(|_| format!("unknown channel '{channel}'"))?;

    Ok((channel, url.trim().to_string()))
}

pub fn handle(repo: &Repository, cmd: &Command) -> Result<()> {
    match cmd {
        Command::List(args) => {
            let profiles = visible_profiles(&repo.profiles(), &list_filters(repo, args));
            if profiles.is_empty() {
                println!("{}", "No se encontraron egresados".yellow());
            }
            for profile in profiles {
                println!("{}", output::summary(&profile));
            }
        }
        Command::Show { id } => {
            output::detail(&repo.profile(&ProfileId::from(id.as_str()))?);
        }
        Command::Add(args) => {
            let form = build_form(args)?;
            if let Some(area) = unknown_area(&form) {
                warn!("Area '{area}' is not one of the predefined areas");
                println!(
                    "{} el área '{area}' no está en la lista predefinida",
                    "Aviso:".yellow()
                );
            }
            let profile = repo.add_profile(&form)?;
            println!("{} {}", "Perfil agregado:".green(), output::summary(&profile));
        }
        Command::Export {
            id,
            dir,
            clipboard,
        } => {
            let profile = repo.profile(&ProfileId::from(id.as_str()))?;
            if *clipboard {
                let json = export::to_json(&profile)?;
                match copy_to_clipboard(&json) {
                    Ok(()) => println!("{}", "JSON copiado al portapapeles".green()),
                    Err(err) => error!("Error copying to clipboard: {err}"),
                }
            } else {
                let path = export::write_to(dir, &profile)?;
                println!("{} {}", "Exportado:".green(), path.display());
            }
        }
    }

    Ok(())
}

fn list_filters(repo: &Repository, args: &ListArgs) -> FilterState {
    let saved = if args.all {
        FilterState::default()
    } else {
        repo.filters()
    };

    FilterState {
        gender: args.gender.or(saved.gender),
        area: args.area.clone().or(saved.area),
        start_year: args.year.clone().or(saved.start_year),
        search_term: args.search.clone().unwrap_or(saved.search_term),
    }
}

fn build_form(args: &AddArgs) -> Result<ProfileForm> {
    let mut form = match &args.form {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents).map_err(|err| Error::Config(err.to_string()))?
        }
        None => ProfileForm::default(),
    };

    let overrides = [
        (&mut form.name, &args.name),
        (&mut form.position, &args.position),
        (&mut form.company, &args.company),
        (&mut form.description, &args.description),
        (&mut form.area, &args.area),
        (&mut form.start_year, &args.year),
        (&mut form.contact_info.email, &args.email),
        (&mut form.contact_info.phone, &args.phone),
        (&mut form.contact_info.location, &args.location),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }

    if let Some(gender) = args.gender {
        form.gender = gender;
    }
    if let Some(photo) = &args.photo {
        form.set_photo(photo);
    }
    for (channel, url) in &args.links {
        form.set_social_link(*channel, url);
    }
    for skill in &args.skills {
        form.skills.add(skill);
    }
    for interest in &args.interests {
        form.interests.add(interest);
    }
    for achievement in &args.achievements {
        form.achievements.add(achievement);
    }

    Ok(form)
}

/// The form's area, if one was given and it isn't predefined.
fn unknown_area(form: &ProfileForm) -> Option<&str> {
    let area = form.area.trim();
    (!area.is_empty() && !is_predefined_area(area)).then_some(area)
}

fn copy_to_clipboard(text: &str) -> std::result::Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}
