use crate::models::catalog::Project;

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Maintenance Minière",
        category: "machinery",
        image: "https://picsum.photos/seed/mine1/600/450",
        description: "Révision complète d'une flotte d'engins de terrassement.",
    },
    Project {
        id: 2,
        title: "Installation Solaire",
        category: "electrical",
        image: "https://picsum.photos/seed/solar1/600/450",
        description: "Centrale photovoltaïque pour un site industriel à Lubumbashi.",
    },
    Project {
        id: 3,
        title: "Construction Entrepôt",
        category: "civil",
        image: "https://picsum.photos/seed/warehouse1/600/450",
        description: "Structure métallique et génie civil pour stockage logistique.",
    },
    Project {
        id: 4,
        title: "Fourniture de Camions",
        category: "trucks",
        image: "https://picsum.photos/seed/truck1/600/450",
        description: "Livraison de 10 camions bennes pour un projet d'infrastructure.",
    },
    Project {
        id: 5,
        title: "Climatisation Industrielle",
        category: "hvac",
        image: "https://picsum.photos/seed/hvac1/600/450",
        description: "Installation de systèmes VRF pour un complexe de bureaux.",
    },
    Project {
        id: 6,
        title: "Réseau Électrique",
        category: "electrical",
        image: "https://picsum.photos/seed/grid1/600/450",
        description: "Mise en conformité et extension du réseau basse tension.",
    },
];
