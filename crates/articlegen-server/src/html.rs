//! Server-rendered pages for the two forms.
//!
//! Generated text is escaped here, at the point it is embedded in a page.
//! The formatter's own output (HTML mode included) stays unescaped so it can
//! be copied out of the result box verbatim.

use articlegen_core::{FormattedOutput, GenerationOptions, OutputFormat, TemplateStyle};

/// What to show below a form.
pub enum Outcome<'a> {
    Blank,
    Success(&'a FormattedOutput),
    Failure(String),
}

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn basic_page(keyword: &str, outcome: &Outcome<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>🧠 AI記事構成メーカー（無料版）</h1>\n");
    body.push_str("<p>キーワードを入れるだけで記事構成と導入文を自動生成します。</p>\n");
    body.push_str("<form method=\"post\" action=\"/\">\n");
    push_keyword_input(&mut body, keyword);
    body.push_str("<button type=\"submit\">構成を生成する</button>\n</form>\n");

    match outcome {
        Outcome::Blank => {}
        Outcome::Success(output) => {
            body.push_str("<p class=\"ok\">✅ 生成完了！</p>\n<h2>生成結果（Markdown）</h2>\n");
            body.push_str(&format!("<pre class=\"result\">{}</pre>\n", escape(&output.text)));
        }
        Outcome::Failure(msg) => push_failure(&mut body, msg),
    }

    body.push_str(
        "<aside>\n<p>📌 <a href=\"/premium\">有料版</a>では以下のような拡張機能をご利用いただけます：</p>\n<ul>\n\
         <li>テンプレ選択（PREP/AIDA/SEO型など構成を自由に変更）</li>\n\
         <li>32文字以内のクリック率を意識したタイトル案を自動生成</li>\n\
         <li>Xやnoteに最適なハッシュタグを5つ提案</li>\n\
         <li>シェアや購入を促すCTA文（締めの文章）も自動出力</li>\n\
         <li>SEO情報（キーフレーズ・メタディスクリプション・スラッグ）</li>\n\
         <li>HTML形式でのコピーも可能（ブログ貼り付け用）</li>\n\
         </ul>\n</aside>\n",
    );

    layout("AI記事構成メーカー（無料体験）", &body)
}

pub fn premium_page(keyword: &str, options: &GenerationOptions, outcome: &Outcome<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>🧠 AI記事構成メーカー（有料版）</h1>\n");
    body.push_str("<p>テンプレ・タイトル・CTA・タグ・SEOまで一括生成。もう“書くだけ”の状態へ。</p>\n");
    body.push_str("<form method=\"post\" action=\"/premium\">\n");
    push_keyword_input(&mut body, keyword);

    body.push_str("<label>🧩 構成テンプレートを選択\n<select name=\"template\">\n");
    for style in TemplateStyle::ALL {
        let selected = if style == options.template { " selected" } else { "" };
        body.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            style.as_str(),
            escape(style.label())
        ));
    }
    body.push_str("</select></label>\n");

    let toggles = [
        ("title", "タイトル案を生成する", options.title),
        ("cta", "CTA（締めの文章）を生成する", options.cta),
        ("hashtags", "ハッシュタグを提案する", options.hashtags),
        ("writing_guide", "各見出しに“執筆ガイド”をつける", options.writing_guide),
        ("seo", "SEO情報（タイトル・キーフレーズなど）を生成する", options.seo),
    ];
    for (name, label, checked) in toggles {
        let checked = if checked { " checked" } else { "" };
        body.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"{name}\"{checked}> ✅ {label}</label>\n"
        ));
    }

    body.push_str("<fieldset><legend>📄 出力形式を選択</legend>\n");
    for fmt in OutputFormat::ALL {
        let checked = if fmt == options.format { " checked" } else { "" };
        body.push_str(&format!(
            "<label><input type=\"radio\" name=\"format\" value=\"{}\"{checked}> {}</label>\n",
            fmt.as_str(),
            escape(fmt.label())
        ));
    }
    body.push_str("</fieldset>\n<button type=\"submit\">🚀 すべて生成する</button>\n</form>\n");

    match outcome {
        Outcome::Blank => {}
        Outcome::Success(output) => {
            body.push_str("<p class=\"ok\">✅ 生成完了！</p>\n");
            body.push_str(&format!(
                "<label>生成結果\n<textarea class=\"result\" rows=\"30\" readonly>{}</textarea></label>\n",
                escape(&output.text)
            ));
        }
        Outcome::Failure(msg) => push_failure(&mut body, msg),
    }

    layout("AI記事構成メーカー（有料版）", &body)
}

fn push_keyword_input(body: &mut String, keyword: &str) {
    body.push_str(&format!(
        "<label>📝 キーワードを入力してください\n\
         <input type=\"text\" name=\"keyword\" value=\"{}\" required pattern=\".*\\S.*\"></label>\n",
        escape(keyword)
    ));
}

fn push_failure(body: &mut String, msg: &str) {
    body.push_str(&format!(
        "<p class=\"error\" role=\"alert\">⚠️ 生成に失敗しました: {}</p>\n",
        escape(msg)
    ));
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n",
        escape(title)
    )
}

const STYLE: &str = "main{max-width:48rem;margin:2rem auto;font-family:sans-serif;line-height:1.6}\
label{display:block;margin:.5rem 0}\
input[type=text]{width:100%}\
.result{width:100%;white-space:pre-wrap}\
.ok{color:#1a7f37}.error{color:#cf222e}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup() {
        assert_eq!(
            escape(r#"<h2>"A" & 'B'</h2>"#),
            "&lt;h2&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/h2&gt;"
        );
        assert_eq!(escape("日本語"), "日本語");
    }

    #[test]
    fn basic_page_blank_has_form_and_no_result() {
        let page = basic_page("", &Outcome::Blank);
        assert!(page.contains("<form method=\"post\" action=\"/\">"));
        assert!(page.contains("required"));
        assert!(!page.contains("class=\"result\""));
        assert!(!page.contains("role=\"alert\""));
    }

    #[test]
    fn basic_page_escapes_keyword_and_result() {
        let output = FormattedOutput {
            format: OutputFormat::Markdown,
            text: "### <b>x</b>".into(),
        };
        let page = basic_page("\"><script>", &Outcome::Success(&output));
        assert!(page.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(page.contains("<h2>生成結果（Markdown）</h2>"));
        assert!(page.contains("<pre class=\"result\">### &lt;b&gt;x&lt;/b&gt;</pre>"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn premium_page_reflects_selections() {
        let options = GenerationOptions {
            template: TemplateStyle::Aida,
            cta: true,
            seo: true,
            format: OutputFormat::Note,
            ..Default::default()
        };
        let page = premium_page("kw", &options, &Outcome::Blank);
        assert!(page.contains("<option value=\"aida\" selected>AIDA</option>"));
        assert!(page.contains("<option value=\"prep\">PREP</option>"));
        assert!(page.contains("name=\"cta\" checked"));
        assert!(page.contains("name=\"seo\" checked"));
        assert!(page.contains("name=\"title\">"));
        assert!(page.contains("value=\"note\" checked"));
    }

    #[test]
    fn premium_page_html_output_is_shown_escaped_in_textarea() {
        let output = FormattedOutput {
            format: OutputFormat::Html,
            text: "<h2>A</h2>".into(),
        };
        let page = premium_page("kw", &GenerationOptions::default(), &Outcome::Success(&output));
        assert!(page.contains("readonly>&lt;h2&gt;A&lt;/h2&gt;</textarea>"));
    }

    #[test]
    fn failure_shows_message_without_result() {
        let page = premium_page(
            "kw",
            &GenerationOptions::default(),
            &Outcome::Failure("rate limited: quota".into()),
        );
        assert!(page.contains("rate limited: quota"));
        assert!(!page.contains("<textarea"));
    }
}
