//! Onboarding screen content.

/// One introduction page shown during first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingPage {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

/// Fixed ordered page set for the onboarding carousel.
pub fn pages() -> &'static [OnboardingPage] {
    &[
        OnboardingPage {
            title: "One calendar for everyone",
            body: "Keep birthdays, appointments and school events in a single shared place.",
            icon: "calendar",
        },
        OnboardingPage {
            title: "Built for the whole family",
            body: "Adults, kids and admins each get a view that fits their role.",
            icon: "people",
        },
        OnboardingPage {
            title: "Start together",
            body: "Create a new family or join an existing one with an invite code.",
            icon: "home",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::pages;

    #[test]
    fn pages_are_non_empty_and_titled() {
        let pages = pages();
        assert!(!pages.is_empty());
        for page in pages {
            assert!(!page.title.is_empty());
            assert!(!page.body.is_empty());
        }
    }
}
