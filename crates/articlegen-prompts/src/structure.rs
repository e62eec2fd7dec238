use articlegen_core::{Keyword, TemplateStyle};

/// Appended when the writing guide toggle is on.
pub const WRITING_GUIDE_CLAUSE: &str =
    "各見出しの直後に、“このパートで書くべき内容”を1〜2行のアドバイスとして加えてください。";

/// Append the outline instructions for the extended flow.
pub fn append_instructions(
    prompt: &mut String,
    keyword: &Keyword,
    template: TemplateStyle,
    writing_guide: bool,
) {
    prompt.push_str(&format!(
        "以下のキーワードに基づいて、{}型の記事構成を作成してください。\n\n",
        template.label()
    ));
    prompt.push_str(&format!("【キーワード】：{keyword}\n"));
    prompt.push_str(
        "■出力形式：\n\
         1. H2（##）とH3（###）を使った記事構成（H2×2〜3、テンプレートに従って流れを組む）\n\
         2. 150〜200文字の導入文\n",
    );
    if writing_guide {
        prompt.push_str(WRITING_GUIDE_CLAUSE);
        prompt.push('\n');
    }
    prompt.push_str("文章は自然な日本語で、Markdown形式で出力してください。");
}
