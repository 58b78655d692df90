use std::fmt;

/// One atom line of a gro file.
#[derive(Debug, Clone, PartialEq)]
pub struct GroAtom {
    pub residue_number: i32,
    pub residue_name: String,
    pub atom_name: String,
    pub atom_serial: i32,
    /// Position in nm.
    pub position: [f64; 3],
    /// Velocity in nm/ps; zero when the source line carries none.
    pub velocity: [f64; 3],
}

impl GroAtom {
    pub fn new(
        residue_number: i32,
        residue_name: impl Into<String>,
        atom_name: impl Into<String>,
        atom_serial: i32,
        position: [f64; 3],
    ) -> Self {
        Self {
            residue_number,
            residue_name: residue_name.into(),
            atom_name: atom_name.into(),
            atom_serial,
            position,
            velocity: [0.0; 3],
        }
    }

    pub fn with_velocity(mut self, velocity: [f64; 3]) -> Self {
        self.velocity = velocity;
        self
    }
}

/// A gro structure; also the record written for every gro trajectory frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroStructure {
    pub title: String,
    pub atoms: Vec<GroAtom>,
    /// Box edge lengths in nm, zero when unknown.
    pub box_vector: [f64; 3],
}

impl GroStructure {
    pub fn new(title: impl Into<String>, atoms: Vec<GroAtom>) -> Self {
        Self {
            title: title.into(),
            atoms,
            box_vector: [0.0; 3],
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// One atom line of an xyz file.
#[derive(Debug, Clone, PartialEq)]
pub struct XyzAtom {
    pub name: String,
    /// Position in Å.
    pub position: [f64; 3],
}

impl XyzAtom {
    pub fn new(name: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// An xyz structure; also the record written for every xyz trajectory frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzStructure {
    pub title: String,
    pub atoms: Vec<XyzAtom>,
}

impl XyzStructure {
    pub fn new(title: impl Into<String>, atoms: Vec<XyzAtom>) -> Self {
        Self {
            title: title.into(),
            atoms,
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// A reference structure loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    Gro(GroStructure),
    Xyz(XyzStructure),
}

impl Structure {
    pub fn title(&self) -> &str {
        match self {
            Structure::Gro(s) => &s.title,
            Structure::Xyz(s) => &s.title,
        }
    }

    pub fn atom_count(&self) -> usize {
        match self {
            Structure::Gro(s) => s.atom_count(),
            Structure::Xyz(s) => s.atom_count(),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Gro(s) => write!(f, "gro structure '{}' ({} atoms)", s.title, s.atom_count()),
            Structure::Xyz(s) => write!(f, "xyz structure '{}' ({} atoms)", s.title, s.atom_count()),
        }
    }
}
