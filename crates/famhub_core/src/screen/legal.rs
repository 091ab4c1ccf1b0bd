//! Static legal text (privacy policy).

/// One titled section of the privacy policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySection {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Title shown above the policy.
pub const PRIVACY_POLICY_TITLE: &str = "Privacy Policy";

/// Static privacy-policy prose, rendered as-is by the UI.
pub fn privacy_policy() -> &'static [PolicySection] {
    &[
        PolicySection {
            heading: "What we store",
            body: "Your display name, your family's name and the events your family \
                   creates. Nothing else is collected.",
        },
        PolicySection {
            heading: "Who can see it",
            body: "Only members of your family. Family data is never shared with other \
                   families or third parties.",
        },
        PolicySection {
            heading: "Children",
            body: "Child accounts are created and managed by an adult in the family and \
                   carry no contact details of their own.",
        },
        PolicySection {
            heading: "Leaving",
            body: "Leaving a family removes your membership. Signing out removes all \
                   session data from this device.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{privacy_policy, PRIVACY_POLICY_TITLE};

    #[test]
    fn policy_has_title_and_sections() {
        assert!(!PRIVACY_POLICY_TITLE.is_empty());
        let sections = privacy_policy();
        assert!(sections.len() >= 3);
        for section in sections {
            assert!(!section.heading.is_empty());
            assert!(!section.body.is_empty());
        }
    }
}
