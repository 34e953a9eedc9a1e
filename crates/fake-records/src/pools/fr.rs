//! French data pools.

use super::{Locale, LocalePools};

pub(crate) static POOLS: LocalePools = LocalePools {
    locale: Locale::Fr,
    names: &[
        "Jean Dupont",
        "Marie Lefèvre",
        "Pierre Martin",
        "Camille Bernard",
        "Louis Dubois",
        "Chloé Thomas",
        "Hugo Robert",
        "Léa Richard",
        "Théo Petit",
        "Manon Durand",
        "François Leroy",
        "Zoé Moreau",
        "Benoît Simon",
        "Inès Laurent",
        "Jérôme Lefebvre",
        "Anaïs Michel",
        "Gaëlle Garnier",
        "Noël Fournier",
    ],
    domains: &[
        "exemple.fr",
        "courriel.fr",
        "boite.net",
        "messagerie.com",
        "poste.fr",
    ],
    phone_numbers: &[
        "+33 6 12 34 56 78",
        "+33 6 23 45 67 89",
        "+33 7 34 56 78 90",
        "+33 1 45 67 89 01",
        "+33 4 56 78 90 12",
        "01 23 45 67 89",
        "04 91 55 01 23",
        "05 56 44 12 34",
    ],
    cities: &[
        "Paris",
        "Marseille",
        "Lyon",
        "Toulouse",
        "Nice",
        "Nantes",
        "Strasbourg",
        "Montpellier",
        "Bordeaux",
        "Lille",
        "Orléans",
        "Besançon",
    ],
    addresses: &[
        "12 rue de la Paix",
        "45 avenue des Champs-Élysées",
        "8 boulevard Saint-Michel",
        "3 place Bellecour",
        "27 rue du Faubourg",
        "61 quai de la Tournelle",
        "14 allée des Tilleuls",
        "9 impasse des Lilas",
        "150 route de Lyon",
        "2 chemin du Moulin",
    ],
    job_titles: &[
        "Ingénieur logiciel",
        "Chef de produit",
        "Data scientist",
        "Designer UX",
        "Chargée de marketing",
        "Commercial",
        "Comptable",
        "Infirmière",
        "Professeur",
        "Chef de projet",
        "Analyste des opérations",
    ],
    company_names: &[
        "Société Générale des Services",
        "Groupe Hexagone",
        "Atelier Lumière SARL",
        "Technologies Rhône-Alpes",
        "Compagnie Atlantique",
        "Boulangerie Dufour et Fils",
        "Conseil & Stratégie SAS",
        "Énergies du Midi",
    ],
    hobbies: &[
        "Lecture",
        "Randonnée",
        "Cuisine",
        "Photographie",
        "Jardinage",
        "Cyclisme",
        "Échecs",
        "Peinture",
        "Course à pied",
        "Pétanque",
        "Cinéma",
    ],
    education_levels: &[
        "Brevet des collèges",
        "Baccalauréat",
        "BTS",
        "Licence",
        "Master",
        "Doctorat",
    ],
    skills: &[
        "JavaScript",
        "Python",
        "Rust",
        "SQL",
        "Gestion de projet",
        "Prise de parole",
        "Analyse de données",
        "Négociation",
        "Conception graphique",
        "Rédaction",
        "Management d'équipe",
        "Relation client",
    ],
};
