use articlegen_core::Keyword;

pub fn append_instructions(prompt: &mut String, keyword: &Keyword) {
    prompt.push_str(&format!(
        "{keyword} に関するブログ投稿向けのハッシュタグを5個、日本語で出力してください。"
    ));
}
