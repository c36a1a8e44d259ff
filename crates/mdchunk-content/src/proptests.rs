//! Property-based tests for splitting and chunking.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::markdown::{chunk_by_heading, split_front_matter};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_front_matter_scalar_roundtrip(
            key in "k[a-z_]{0,11}",
            value in "V[A-Za-z0-9 ]{0,20}[A-Za-z0-9]",
            body in "[A-Za-z0-9 #\n]{0,80}",
        ) {
            let raw = format!("---\n{key}: {value}\n---\n{body}");
            let front = split_front_matter(&raw).unwrap();

            prop_assert_eq!(front.get_str(&key), Some(value.as_str()));
            prop_assert_eq!(front.body(), body.as_str());
        }

        #[test]
        fn test_no_front_matter_identity(raw in "(?s)[^-].{0,200}") {
            let front = split_front_matter(&raw).unwrap();

            prop_assert!(!front.has_front_matter());
            prop_assert!(front.metadata().is_empty());
            prop_assert_eq!(front.body(), raw.as_str());
        }

        #[test]
        fn test_chunk_count_matches_heading_count(
            lead in "[A-Za-z][A-Za-z .]{0,30}",
            titles in proptest::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,15}", 1..8),
            with_lead in any::<bool>(),
        ) {
            let mut body = String::new();
            if with_lead {
                body.push_str(&lead);
                body.push_str("\n\n");
            }
            for title in &titles {
                body.push_str(&format!("## {title}\n\nText under {title}.\n\n"));
            }

            let sections = chunk_by_heading(&body);
            let expected = titles.len() + usize::from(with_lead);
            prop_assert_eq!(sections.len(), expected);

            let offset = usize::from(with_lead);
            for (section, title) in sections[offset..].iter().zip(&titles) {
                prop_assert_eq!(section.heading.as_str(), title.trim());
            }
        }

        #[test]
        fn test_sections_are_trimmed_and_titled(body in "[A-Za-z#\n \t]{0,120}") {
            for section in chunk_by_heading(&body) {
                prop_assert!(!section.heading.is_empty());
                prop_assert_eq!(section.content.trim(), section.content.as_str());
            }
        }
    }
}
