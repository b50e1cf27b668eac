use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    Intermediate,
    Advanced,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }

    /// Pin color, all within the site's sky/cyan palette.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Basic => "#38bdf8",
            Tier::Intermediate => "#0ea5e9",
            Tier::Advanced => "#06b6d4",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurriculumSection {
    pub tier: Tier,
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

/// A skill track with its own roadmap page.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub slug: &'static str,
    pub title: &'static str,
    /// One-liner for the roadmap index card.
    pub blurb: &'static str,
    pub summary: &'static str,
    pub closing: &'static str,
    pub sections: &'static [CurriculumSection],
}
