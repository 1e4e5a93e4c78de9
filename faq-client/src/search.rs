use shared_types::FaqRecord;

/// Case-insensitive substring filter over question and answer.
///
/// A blank term returns every record. Order follows the input slice.
pub fn filter_faqs<'a>(faqs: &'a [FaqRecord], term: &str) -> Vec<&'a FaqRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return faqs.iter().collect();
    }

    faqs.iter().filter(|faq| faq.matches(&needle)).collect()
}
