//! Static listing of the group members shown on the profiles page.

/// A group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub id: &'static str,
    pub bio: &'static str,
}

pub const GROUP_MEMBERS: &[Profile] = &[
    Profile {
        name: "Aldred Custodio",
        id: "aldred",
        bio: "Eme eme.",
    },
    Profile {
        name: "Dhandrei Blanco",
        id: "dhandrei",
        bio: "eme eme.",
    },
    Profile {
        name: "Johan Fernandez",
        id: "johan",
        bio: "mmmhmmm.",
    },
    Profile {
        name: "Kurt Alcoriza",
        id: "kurt",
        bio: "emee.",
    },
    Profile {
        name: "Rafael Pillejera",
        id: "rafael",
        bio: "eme ememe emee.",
    },
    Profile {
        name: "Rob Vera",
        id: "rob",
        bio: "eme emeem .",
    },
    Profile {
        name: "Stephen Mark Mariñas",
        id: "stephen",
        bio: "eme emee emee .",
    },
];
