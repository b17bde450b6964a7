use alumni_lib::repository::Profile;
use colored::Colorize;

/// One line per profile for listings.
pub fn summary(profile: &Profile) -> String {
    let mut line = format!(
        "{}  {} ({}, {})",
        profile.id.to_string().dimmed(),
        profile.name.bold(),
        profile.position,
        profile.company
    );

    if !profile.area.is_empty() {
        line.push_str(&format!(" [{}]", profile.area.cyan()));
    }

    line
}

fn heading(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

fn list(title: &str, items: Option<&Vec<String>>) {
    let Some(items) = items else {
        return;
    };

    heading(title);
    for item in items {
        println!("  • {item}");
    }
}

/// Everything known about a profile, section by section.
pub fn detail(profile: &Profile) {
    println!("{}", profile.name.bold());
    println!("{} en {}", profile.position, profile.company);
    println!("{}", profile.description);
    println!();

    if let Some(gender) = profile.gender {
        println!("{} {gender}", "Género:".dimmed());
    }
    if !profile.area.is_empty() {
        println!("{} {}", "Área:".dimmed(), profile.area);
    }
    if !profile.start_year.is_empty() {
        println!("{} {}", "Año de ingreso:".dimmed(), profile.start_year);
    }
    println!("{} {}", "Foto:".dimmed(), profile.photo);

    if !profile.social_links.is_empty() {
        heading("Redes");
        for (channel, url) in &profile.social_links {
            println!("  {}: {url}", channel.label());
        }
    }

    if let Some(contact) = &profile.contact_info {
        heading("Contacto");
        for (label, value) in [
            ("Email", &contact.email),
            ("Teléfono", &contact.phone),
            ("Ubicación", &contact.location),
        ] {
            if !value.is_empty() {
                println!("  {label}: {value}");
            }
        }
    }

    if let Some(education) = &profile.education {
        heading("Educación");
        for entry in education {
            println!("  {} - {} {}", entry.degree.bold(), entry.institution, entry.year.dimmed());
        }
    }

    if let Some(experience) = &profile.experience {
        heading("Experiencia");
        for entry in experience {
            println!("  {} - {} {}", entry.position.bold(), entry.company, entry.period.dimmed());
            if !entry.description.is_empty() {
                println!("    {}", entry.description);
            }
        }
    }

    list("Habilidades", profile.skills.as_ref());

    if let Some(projects) = &profile.projects {
        heading("Proyectos");
        for project in projects {
            println!("  {} {}", project.name.bold(), project.year.dimmed());
            if !project.technologies.is_empty() {
                println!("    {}", project.technologies.join(", "));
            }
            if let Some(link) = &project.link {
                println!("    {link}");
            }
        }
    }

    if let Some(certifications) = &profile.certifications {
        heading("Certificaciones");
        for cert in certifications {
            println!("  {} - {} {}", cert.name.bold(), cert.issuer, cert.year.dimmed());
        }
    }

    if let Some(languages) = &profile.languages {
        heading("Idiomas");
        for language in languages {
            println!("  {}: {}", language.name, language.level);
        }
    }

    list("Intereses", profile.interests.as_ref());
    list("Logros", profile.achievements.as_ref());
}
