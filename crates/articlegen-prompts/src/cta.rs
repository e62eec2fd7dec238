use articlegen_core::Keyword;

pub fn append_instructions(prompt: &mut String, keyword: &Keyword) {
    prompt.push_str(&format!(
        "{keyword} に関連するブログやnote記事の最後に使える締めの文章（CTA）を2〜3文提案してください。"
    ));
}
