use alumni_lib::{
    Repository, Result,
    repository::Gender,
    search::FilterState,
};
use clap::Subcommand;
use colored::Colorize;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the saved search and filters
    Show,
    /// Set one or more filters, keeping the others
    Set {
        #[arg(short, long)]
        gender: Option<Gender>,
        #[arg(short, long)]
        area: Option<String>,
        #[arg(short, long)]
        year: Option<String>,
    },
    /// Set the saved search term; an empty term clears it
    Search { term: Option<String> },
    /// Clear gender, area and year
    Clear {
        /// Also clear the search term
        #[arg(long)]
        all: bool,
    },
}

pub fn handle(repo: &Repository, cmd: &Command) -> Result<()> {
    match cmd {
        Command::Show => {}
        Command::Set { gender, area, year } => {
            let current = repo.filters();
            repo.set_filters(FilterState {
                gender: gender.or(current.gender),
                area: area.clone().or(current.area),
                start_year: year.clone().or(current.start_year),
                search_term: current.search_term,
            });
        }
        Command::Search { term } => repo.set_search_term(term.as_deref().unwrap_or_default()),
        Command::Clear { all } => {
            if *all {
                repo.reset_filters();
            } else {
                repo.clear_filters();
            }
        }
    }

    show(&repo.filters());

    Ok(())
}

fn show(filters: &FilterState) {
    let any = "todos".dimmed().to_string();

    println!(
        "{} {}",
        "Búsqueda:".bold(),
        if filters.search_term.is_empty() {
            any.clone()
        } else {
            filters.search_term.clone()
        }
    );
    println!(
        "{} {}",
        "Género:".bold(),
        filters
            .gender
            .map(|gender| gender.to_string())
            .unwrap_or_else(|| any.clone())
    );
    println!(
        "{} {}",
        "Área:".bold(),
        filters.area.clone().unwrap_or_else(|| any.clone())
    );
    println!(
        "{} {}",
        "Año de ingreso:".bold(),
        filters.start_year.clone().unwrap_or(any)
    );
}
