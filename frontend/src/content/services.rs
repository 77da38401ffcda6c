use crate::models::catalog::ServiceCategory;

pub const SERVICES: &[ServiceCategory] = &[
    ServiceCategory {
        id: "parts",
        title: "Pièces de Rechange",
        description: "Vente de pièces de rechange pour tout type de véhicules de toutes marques (Pneus, Pompes, Moteurs, Suspensions, etc.).",
        icon: "fas fa-gear",
        image: "/assets/service-parts.png",
        details: &[
            "Pneus et jantes",
            "Pompes à eau et liquide de refroidissement",
            "Moteurs et alternateurs",
            "Batteries et kits de distribution",
            "Filtres et démarreurs",
        ],
    },
    ServiceCategory {
        id: "machinery",
        title: "Engins de Chantier",
        description: "Fourniture d'engins lourds pour la construction, rénovation, aménagement et démolition.",
        icon: "fas fa-person-digging",
        image: "https://picsum.photos/seed/excavator/600/400",
        details: &[
            "Tracteurs et Mini-pelles",
            "Pelles sur chenilles et sur pneus",
            "Bouteurs et Tracteurs sur chenilles",
            "Niveleuses et Compacteurs",
            "Élévateurs de chantier",
        ],
    },
    ServiceCategory {
        id: "trucks",
        title: "Camions & Trucks",
        description: "Une large gamme de camions de transport robustes adaptés à vos besoins logistiques.",
        icon: "fas fa-truck",
        image: "https://picsum.photos/seed/heavy-truck/600/400",
        details: &[
            "Camions bennes",
            "Tracteurs routiers",
            "Camions de transport de marchandises",
            "Véhicules utilitaires légers",
        ],
    },
    ServiceCategory {
        id: "civil",
        title: "Génie Civil & Construction",
        description: "Conception, planification et fourniture de matériaux pour vos projets de construction.",
        icon: "fas fa-helmet-safety",
        image: "https://picsum.photos/seed/civil-eng/600/400",
        details: &[
            "Conception et Planification",
            "Fourniture de matériaux de construction",
            "Équipements de chantier",
            "Génie civil complet",
        ],
    },
    ServiceCategory {
        id: "electrical",
        title: "Matériels Électriques & Solaire",
        description: "Installation, dépannage et fourniture de matériels électriques et solutions solaires.",
        icon: "fas fa-bolt",
        image: "https://picsum.photos/seed/solar-panels/600/400",
        details: &[
            "Moteurs et Batteries",
            "Disjoncteurs et Fusibles",
            "Éclairages industriels et publics",
            "Panneaux solaires et onduleurs",
            "Automatisation et domotique",
        ],
    },
    ServiceCategory {
        id: "hvac",
        title: "Climatisation & Froid",
        description: "Vente, installation et maintenance de climatiseurs et chambres froides.",
        icon: "fas fa-wind",
        image: "https://picsum.photos/seed/ac-unit/600/400",
        details: &[
            "Installation de climatiseurs",
            "Maintenance préventive et curative",
            "Chambres froides industrielles",
            "Maintenance du gaz",
        ],
    },
];
