use articlegen_core::Keyword;

/// Append the outline instructions for the basic (free) flow.
pub fn append_instructions(prompt: &mut String, keyword: &Keyword) {
    prompt.push_str("以下のキーワードに基づいて、ブログ記事の構成を作成してください。\n\n");
    prompt.push_str(&format!("【キーワード】：{keyword}\n\n"));
    prompt.push_str(
        "■必要な出力形式（Markdown形式で）：\n\
         1. H2（##）とH3（###）を使った記事構成（H2×2〜3、H3を含めてください）\n\
         2. 150〜200文字程度の導入文（最初のパラグラフ）\n\n\
         Markdownとして正しく整形し、日本語で自然に書いてください。\n",
    );
}
