//! Spanish data pools.

use super::{Locale, LocalePools};

pub(crate) static POOLS: LocalePools = LocalePools {
    locale: Locale::Es,
    names: &[
        "José García",
        "María Rodríguez",
        "Juan Martínez",
        "Lucía Fernández",
        "Antonio López",
        "Carmen Sánchez",
        "Manuel Pérez",
        "Ana Gómez",
        "Francisco Martín",
        "Laura Jiménez",
        "Javier Ruiz",
        "Isabel Hernández",
        "Sergio Díaz",
        "Paula Muñoz",
        "Álvaro Moreno",
        "Núria Álvarez",
        "Iñaki Romero",
        "Elena Navarro",
    ],
    domains: &[
        "correo.es",
        "ejemplo.com",
        "buzon.es",
        "mensajes.net",
        "telemail.es",
    ],
    phone_numbers: &[
        "+34 612 345 678",
        "+34 623 456 789",
        "+34 634 567 890",
        "+34 645 678 901",
        "+34 911 234 567",
        "+34 932 345 678",
        "+34 954 456 789",
        "+34 963 567 890",
    ],
    cities: &[
        "Madrid",
        "Barcelona",
        "Valencia",
        "Sevilla",
        "Zaragoza",
        "Málaga",
        "Bilbao",
        "Alicante",
        "Córdoba",
        "Valladolid",
        "Granada",
        "A Coruña",
    ],
    addresses: &[
        "Calle Mayor 12",
        "Avenida de la Constitución 45",
        "Calle de Alcalá 101",
        "Paseo de Gracia 23",
        "Plaza de España 7",
        "Calle Real 88",
        "Gran Vía 34",
        "Calle del Sol 5",
        "Ronda de Toledo 19",
        "Camino Viejo 3",
    ],
    job_titles: &[
        "Ingeniera de Software",
        "Jefe de Producto",
        "Científico de Datos",
        "Diseñadora UX",
        "Especialista en Marketing",
        "Representante de Ventas",
        "Contable",
        "Enfermero",
        "Profesora",
        "Coordinador de Proyectos",
        "Analista de Operaciones",
    ],
    company_names: &[
        "Soluciones Ibéricas S.L.",
        "Grupo Mediterráneo",
        "Tecnologías del Sur S.A.",
        "Construcciones Norte",
        "Innovación Digital S.L.",
        "Distribuciones Castilla",
        "Consultores Atlántico",
        "Energías Renovables Levante",
    ],
    hobbies: &[
        "Leer",
        "Senderismo",
        "Cocinar",
        "Fotografía",
        "Jardinería",
        "Ciclismo",
        "Ajedrez",
        "Pintura",
        "Correr",
        "Bailar flamenco",
        "Fútbol",
    ],
    education_levels: &[
        "Educación Secundaria",
        "Bachillerato",
        "Formación Profesional",
        "Grado Universitario",
        "Máster",
        "Doctorado",
    ],
    skills: &[
        "JavaScript",
        "Python",
        "Rust",
        "SQL",
        "Gestión de Proyectos",
        "Hablar en Público",
        "Análisis de Datos",
        "Negociación",
        "Diseño Gráfico",
        "Redacción",
        "Liderazgo de Equipos",
        "Atención al Cliente",
    ],
};
