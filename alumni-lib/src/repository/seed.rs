use std::collections::BTreeMap;

use crate::repository::{Gender, Profile, ProfileId, SocialChannel};

/// Areas offered by the profile form.
pub const PREDEFINED_AREAS: &[&str] = &[
    "Desarrollo de Software",
    "Infraestructura y Cloud",
    "Ciberseguridad",
    "Arquitectura de Software",
    "Ciencia de Datos",
    "Gestión de Proyectos",
    "Inteligencia Artificial",
    "Redes y Telecomunicaciones",
    "Desarrollo Web",
    "Desarrollo Móvil",
    "Bases de Datos",
    "DevOps",
    "UX/UI",
    "Otro",
];

/// Whether `area` is one of [`PREDEFINED_AREAS`]. Matching is exact, like the area filter.
pub fn is_predefined_area(area: &str) -> bool {
    PREDEFINED_AREAS.contains(&area)
}

const SAMPLE_PHOTO: &str = "/placeholder.svg?height=300&width=300";

struct Sample {
    id: &'static str,
    name: &'static str,
    position: &'static str,
    company: &'static str,
    description: &'static str,
    gender: Gender,
    area: &'static str,
    start_year: &'static str,
    links: &'static [(SocialChannel, &'static str)],
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        name: "Ana García Hernández",
        position: "Desarrolladora Full Stack",
        company: "Microsoft México",
        description: "Especialista en desarrollo web y aplicaciones móviles con experiencia en React y Node.js.",
        gender: Gender::Feminine,
        area: "Desarrollo de Software",
        start_year: "2014",
        links: &[
            (SocialChannel::Linkedin, "https://linkedin.com/in/anagarcia"),
            (SocialChannel::Github, "https://github.com/anagarcia"),
            (SocialChannel::Twitter, "https://twitter.com/anagarcia"),
        ],
    },
    Sample {
        id: "2",
        name: "Carlos Martínez López",
        position: "Ingeniero DevOps",
        company: "Amazon Web Services",
        description: "Experto en infraestructura cloud y automatización de procesos de desarrollo.",
        gender: Gender::Masculine,
        area: "Infraestructura y Cloud",
        start_year: "2013",
        links: &[
            (SocialChannel::Linkedin, "https://linkedin.com/in/carlosmartinez"),
            (SocialChannel::Github, "https://github.com/carlosmartinez"),
        ],
    },
    Sample {
        id: "3",
        name: "Laura Sánchez Ramírez",
        position: "Analista de Ciberseguridad",
        company: "Banco de México",
        description: "Especialista en seguridad informática con enfoque en protección de infraestructuras críticas.",
        gender: Gender::Feminine,
        area: "Ciberseguridad",
        start_year: "2015",
        links: &[
            (SocialChannel::Linkedin, "https://linkedin.com/in/laurasanchez"),
            (SocialChannel::Twitter, "https://twitter.com/laurasanchez"),
        ],
    },
    Sample {
        id: "4",
        name: "Miguel Ángel Pérez Torres",
        position: "Arquitecto de Software",
        company: "IBM México",
        description: "Diseñador de soluciones tecnológicas escalables para grandes empresas.",
        gender: Gender::Masculine,
        area: "Arquitectura de Software",
        start_year: "2012",
        links: &[
            (SocialChannel::Linkedin, "https://linkedin.com/in/miguelperez"),
            (SocialChannel::Github, "https://github.com/miguelperez"),
            (SocialChannel::Website, "https://miguelperez.dev"),
        ],
    },
    Sample {
        id: "5",
        name: "Sofía Rodríguez Gómez",
        position: "Científica de Datos",
        company: "Google",
        description: "Especialista en inteligencia artificial y análisis de datos masivos.",
        gender: Gender::Feminine,
        area: "Ciencia de Datos",
        start_year: "2015",
        links: &[
            (SocialChannel::Linkedin, "https://linkedin.com/in/sofiarodriguez"),
            (SocialChannel::Github, "https://github.com/sofiarodriguez"),
            (SocialChannel::Twitter, "https://twitter.com/sofiarodriguez"),
        ],
    },
    Sample {
        id: "6",
        name: "Javier López Mendoza",
        position: "Gerente de Proyectos TI",
        company: "Telmex",
        description: "Coordinador de equipos de desarrollo y experto en metodologías ágiles.",
        gender: Gender::Masculine,
        area: "Gestión de Proyectos",
        start_year: "2011",
        links: &[(SocialChannel::Linkedin, "https://linkedin.com/in/javierlopez")],
    },
];

/// The roster a fresh installation starts with.
pub fn sample_profiles() -> Vec<Profile> {
    SAMPLES
        .iter()
        .map(|sample| Profile {
            id: ProfileId::from(sample.id),
            name: sample.name.to_string(),
            photo: SAMPLE_PHOTO.to_string(),
            position: sample.position.to_string(),
            company: sample.company.to_string(),
            description: sample.description.to_string(),
            social_links: sample
                .links
                .iter()
                .map(|(channel, url)| (*channel, url.to_string()))
                .collect::<BTreeMap<_, _>>(),
            gender: Some(sample.gender),
            area: sample.area.to_string(),
            start_year: sample.start_year.to_string(),
            contact_info: None,
            education: None,
            experience: None,
            skills: None,
            projects: None,
            certifications: None,
            languages: None,
            interests: None,
            achievements: None,
        })
        .collect()
}
