use super::TagRequest;

pub fn tag_system() -> String {
    "You are a social media expert that provides relevant hashtags and content tags.".to_string()
}

/// Instruction asking for 5-7 tags for the supplied bookmark fields, as a
/// JSON array of lowercase tags without a leading # symbol.
pub fn suggest_tags(req: &TagRequest) -> String {
    let mut prompt =
        String::from("Generate 5-7 relevant hashtags or content tags for the following");

    match req.platform_type.as_deref().filter(|s| !s.is_empty()) {
        Some(platform_type) => {
            prompt.push_str(&format!(" {} post", platform_type));
        }
        None => prompt.push_str(" social media post"),
    }

    if let Some(title) = req.title.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\nTitle: \"{}\"", title));
    }
    if let Some(url) = req.url.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\nURL: {}", url));
    }
    if let Some(content) = req.content.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\nContent: \"{}\"", content));
    }

    prompt.push_str(
        "\n\nReturn only a JSON array of lowercase tags without # symbol. \
         Example: [\"marketing\", \"socialmedia\", \"analytics\"]",
    );
    prompt
}
