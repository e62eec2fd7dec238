use articlegen_core::Keyword;

/// Append the SEO metadata instructions: focus keyphrase, title, meta
/// description and slug.
pub fn append_instructions(prompt: &mut String, keyword: &Keyword) {
    prompt.push_str(
        "以下のキーワードに基づいて、ブログ記事やnote投稿で使えるSEO情報を出力してください。\n\n",
    );
    prompt.push_str(&format!("【キーワード】：{keyword}\n\n"));
    prompt.push_str(
        "■ 出力形式：\n\
         1. フォーカスキーフレーズ（自然な日本語で）\n\
         2. SEOタイトル（クリックされやすく32文字以内）\n\
         3. メタディスクリプション（検索結果に表示されやすい120〜160文字程度）\n\
         4. スラッグ（英単語、ハイフン区切りでURL用に適した形）\n\n\
         日本語・記号整形済みで、箇条書き形式で出力してください。\n",
    );
}
