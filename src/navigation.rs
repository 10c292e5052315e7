/// Top-level menu groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Main,
    External,
    Internal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Main, Category::External, Category::Internal];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Main => "Main",
            Category::External => "External Factors",
            Category::Internal => "Internal Factors",
        }
    }

    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| section.category() == *self)
            .collect()
    }
}

/// Every page the menu can select. The current selection is derived from
/// the route, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Main,
    Precession,
    AxialTilt,
    Eccentricity,
    NaturalFactors,
    HumanInduced,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Main,
        Section::Precession,
        Section::AxialTilt,
        Section::Eccentricity,
        Section::NaturalFactors,
        Section::HumanInduced,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Section::Main => "/",
            Section::Precession => "/external/precession",
            Section::AxialTilt => "/external/axial-tilt",
            Section::Eccentricity => "/external/eccentricity",
            Section::NaturalFactors => "/internal/natural",
            Section::HumanInduced => "/internal/human-induced",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Main => "Main",
            Section::Precession => "Precession",
            Section::AxialTilt => "Axial Tilt",
            Section::Eccentricity => "Eccentricity",
            Section::NaturalFactors => "Natural",
            Section::HumanInduced => "Human-Induced",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Section::Main => Category::Main,
            Section::Precession | Section::AxialTilt | Section::Eccentricity => Category::External,
            Section::NaturalFactors | Section::HumanInduced => Category::Internal,
        }
    }

    /// Match a location pathname, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Section> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Section::ALL
            .into_iter()
            .find(|section| section.path() == normalized)
    }
}
