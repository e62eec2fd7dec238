use articlegen_core::Keyword;

pub fn append_instructions(prompt: &mut String, keyword: &Keyword) {
    prompt.push_str(&format!(
        "{keyword} をテーマに、クリックされやすい記事タイトルを32文字以内で3案出力してください。"
    ));
}
