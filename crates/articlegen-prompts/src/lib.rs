pub mod basic;
pub mod cta;
pub mod hashtags;
pub mod seo;
pub mod structure;
pub mod title;

use articlegen_core::{Capability, GenerationOptions, Keyword, PromptRequest};

/// Assemble every prompt the extended flow sends, in call order.
///
/// The outline prompt always comes first; each enabled extra adds one
/// prompt after it.
pub fn assemble(keyword: &Keyword, options: &GenerationOptions) -> Vec<PromptRequest> {
    options
        .capabilities()
        .into_iter()
        .map(|capability| {
            let mut prompt = String::new();
            match capability {
                Capability::Structure => structure::append_instructions(
                    &mut prompt,
                    keyword,
                    options.template,
                    options.writing_guide,
                ),
                Capability::Title => title::append_instructions(&mut prompt, keyword),
                Capability::Cta => cta::append_instructions(&mut prompt, keyword),
                Capability::Hashtags => hashtags::append_instructions(&mut prompt, keyword),
                Capability::Seo => seo::append_instructions(&mut prompt, keyword),
            }
            PromptRequest::new(capability, prompt)
        })
        .collect()
}

/// Assemble the single outline prompt of the basic flow.
pub fn assemble_basic(keyword: &Keyword) -> PromptRequest {
    let mut prompt = String::new();
    basic::append_instructions(&mut prompt, keyword);
    PromptRequest::new(Capability::Structure, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use articlegen_core::TemplateStyle;

    fn kw(s: &str) -> Keyword {
        Keyword::parse(s).unwrap()
    }

    #[test]
    fn no_extras_yields_single_structure_prompt() {
        for keyword in ["副業", "rust async", "  spaced  ", "C++ & <html>"] {
            let prompts = assemble(&kw(keyword), &GenerationOptions::default());
            assert_eq!(prompts.len(), 1);
            assert_eq!(prompts[0].capability, Capability::Structure);
            assert!(prompts[0].text.contains(keyword));
            assert!(!prompts[0].text.contains(structure::WRITING_GUIDE_CLAUSE));
        }
    }

    #[test]
    fn prompt_count_is_one_plus_enabled_extras() {
        for mask in 0u8..16 {
            let opts = GenerationOptions {
                title: mask & 1 != 0,
                cta: mask & 2 != 0,
                hashtags: mask & 4 != 0,
                seo: mask & 8 != 0,
                ..Default::default()
            };
            let prompts = assemble(&kw("kw"), &opts);
            assert_eq!(prompts.len(), 1 + mask.count_ones() as usize, "mask {mask:04b}");
        }
    }

    #[test]
    fn all_extras_in_fixed_order() {
        let opts = GenerationOptions {
            title: true,
            cta: true,
            hashtags: true,
            seo: true,
            ..Default::default()
        };
        let caps: Vec<Capability> = assemble(&kw("kw"), &opts)
            .into_iter()
            .map(|p| p.capability)
            .collect();
        assert_eq!(caps, Capability::ALL.to_vec());
    }

    #[test]
    fn subset_keeps_relative_order() {
        let opts = GenerationOptions {
            seo: true,
            cta: true,
            ..Default::default()
        };
        let caps: Vec<Capability> = assemble(&kw("kw"), &opts)
            .into_iter()
            .map(|p| p.capability)
            .collect();
        assert_eq!(caps, vec![Capability::Structure, Capability::Cta, Capability::Seo]);
    }

    #[test]
    fn every_prompt_contains_keyword() {
        let opts = GenerationOptions {
            title: true,
            cta: true,
            hashtags: true,
            seo: true,
            writing_guide: true,
            template: TemplateStyle::Aida,
            ..Default::default()
        };
        for prompt in assemble(&kw("ふるさと納税"), &opts) {
            assert!(prompt.text.contains("ふるさと納税"), "{}", prompt.capability);
        }
    }

    #[test]
    fn writing_guide_only_changes_structure_prompt() {
        let plain = assemble(&kw("kw"), &GenerationOptions::default());
        let guided = assemble(
            &kw("kw"),
            &GenerationOptions {
                writing_guide: true,
                ..Default::default()
            },
        );
        assert_eq!(guided.len(), 1);
        assert!(guided[0].text.contains(structure::WRITING_GUIDE_CLAUSE));
        assert_ne!(plain[0].text, guided[0].text);
    }

    #[test]
    fn basic_prompt_is_structure() {
        let prompt = assemble_basic(&kw("キャンプ"));
        assert_eq!(prompt.capability, Capability::Structure);
        assert!(prompt.text.contains("キャンプ"));
    }
}
