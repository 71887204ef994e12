//! Static content model for the promotional article.
//!
//! The article is an ordered sequence of sections. Section order is fixed at
//! construction; the scroll tracker only ever sees section ids and geometry,
//! never the blocks themselves.

/// One vertically scrolling article.
pub struct Article {
    pub title: &'static str,
    pub publisher: &'static str,
    pub sections: Vec<Section>,
}

/// One labeled block of page content with a unique identifier.
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    /// Display numeral shown in the section heading badge, if any.
    pub numeral: Option<&'static str>,
    pub blocks: Vec<Block>,
}

/// Renderable payloads. Opaque to the tracker.
pub enum Block {
    /// Large cover headline.
    Headline(&'static str),
    /// Secondary cover line.
    Subline(&'static str),
    /// Small closing line on the cover.
    Tagline(&'static str),
    Paragraph(&'static str),
    /// Captioned card with a short title and body text.
    Card {
        title: &'static str,
        body: &'static str,
    },
    /// Placeholder for a photograph, rendered with its caption.
    Figure { caption: &'static str },
    /// Clickable table-of-contents entries pointing at other sections.
    Toc(Vec<TocEntry>),
    /// Emphasized one-line takeaway with a leading label.
    Highlight {
        label: &'static str,
        body: &'static str,
    },
}

pub struct TocEntry {
    pub target: &'static str,
    pub label: &'static str,
}

impl Article {
    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.id).collect()
    }
}

/// The full drama-series article, mirroring the published page.
pub fn tax_drama() -> Article {
    Article {
        title: "系列情景剧\u{201c}演\u{201d}活规范执法\u{201c}视\u{201d}效",
        publisher: "国家税务总局临城县税务局",
        sections: vec![
            Section {
                id: "cover",
                title: "封面",
                numeral: None,
                blocks: vec![
                    Block::Headline("系列情景剧"),
                    Block::Subline("\u{201c}演\u{201d}活规范执法\u{201c}视\u{201d}效"),
                    Block::Tagline("创新普法形式 提升执法水平"),
                ],
            },
            Section {
                id: "contents",
                title: "目录",
                numeral: None,
                blocks: vec![Block::Toc(vec![
                    TocEntry {
                        target: "background",
                        label: "01 活动背景与目标",
                    },
                    TocEntry {
                        target: "script",
                        label: "02 实景式编剧：源于实践的创作",
                    },
                    TocEntry {
                        target: "rehearsal",
                        label: "03 体验式彩排：还原真实执法场景",
                    },
                    TocEntry {
                        target: "performance",
                        label: "04 沉浸式表演：矛盾与规范的碰撞",
                    },
                    TocEntry {
                        target: "application",
                        label: "05 应用式转化：从舞台到实践",
                    },
                    TocEntry {
                        target: "achievements",
                        label: "06 活动成效与创新价值",
                    },
                    TocEntry {
                        target: "future",
                        label: "07 未来展望与总结",
                    },
                ])],
            },
            Section {
                id: "background",
                title: "活动背景与目标",
                numeral: Some("一"),
                blocks: vec![
                    Block::Card {
                        title: "背景",
                        body: "针对基层税收执法现状，临城县税务局通过编演税收执法情景剧以\u{201c}演\u{201d}代训，帮助税务干部廓清理解偏差和认识误区，准确掌握税费执法流程，规范执法语言与行为。",
                    },
                    Block::Card {
                        title: "目标",
                        body: "通过\u{201c}以演代训\u{201d}提升干部规范执法意识与水平，有效提高基层人员规范执法意识和水平，丰富涉税矛盾处理经验。",
                    },
                    Block::Figure {
                        caption: "第一期片段截取",
                    },
                ],
            },
            Section {
                id: "script",
                title: "实景式编剧",
                numeral: Some("二"),
                blocks: vec![
                    Block::Figure {
                        caption: "情景剧片段截取",
                    },
                    Block::Card {
                        title: "核心",
                        body: "青年团队自编脚本，素材取自日常执法业务。",
                    },
                    Block::Card {
                        title: "三大聚焦",
                        body: "高业务量、高频过错、高频误区。",
                    },
                    Block::Card {
                        title: "案例",
                        body: "《催报催缴的故事》全景呈现执法流程规范。",
                    },
                ],
            },
            Section {
                id: "rehearsal",
                title: "体验式彩排",
                numeral: Some("三"),
                blocks: vec![
                    Block::Card {
                        title: "形式",
                        body: "独幕剧为主，\u{201c}情节复盘\u{201d}还原\u{201c}我身上/身边的故事\u{201d}。",
                    },
                    Block::Card {
                        title: "特点",
                        body: "背景直入主题、场景简洁真实、人物贴近现实。",
                    },
                    Block::Card {
                        title: "案例",
                        body: "《法拍车交易风波》再现争议处理全过程。",
                    },
                    Block::Figure { caption: "彩排现场" },
                ],
            },
            Section {
                id: "performance",
                title: "沉浸式表演",
                numeral: Some("四"),
                blocks: vec![
                    Block::Figure {
                        caption: "《社保费官司里的\u{201c}官司\u{201d}》",
                    },
                    Block::Card {
                        title: "亮点",
                        body: "自编自导自演，融合真实性、知识性、趣味性。",
                    },
                    Block::Card {
                        title: "三大呈现",
                        body: "演出矛盾、演出瑕疵、演出规范。",
                    },
                    Block::Card {
                        title: "案例",
                        body: "《社保费官司里的\u{201c}官司\u{201d}》纠错示范执法规范。",
                    },
                ],
            },
            Section {
                id: "application",
                title: "应用式转化",
                numeral: Some("五"),
                blocks: vec![
                    Block::Card {
                        title: "路径",
                        body: "\u{201c}从实践中来，到实践中去\u{201d}。",
                    },
                    Block::Card {
                        title: "三大举措",
                        body: "找\u{201c}钥匙\u{201d}、理\u{201c}指引\u{201d}、编\u{201c}案例\u{201d}。",
                    },
                    Block::Card {
                        title: "案例",
                        body: "《豪车疑云》转化为风险应对实操指引。",
                    },
                    Block::Figure {
                        caption: "《豪车疑云》演练现场",
                    },
                ],
            },
            Section {
                id: "achievements",
                title: "活动成效与创新价值",
                numeral: Some("六"),
                blocks: vec![
                    Block::Figure { caption: "领导点评" },
                    Block::Paragraph(
                        "干部规范执法显著提升，执法流程掌握准确率提高，矛盾处理经验丰富。",
                    ),
                    Block::Highlight {
                        label: "形式创新",
                        body: "以演代训，变被动接受为主动参与。",
                    },
                    Block::Highlight {
                        label: "内容创新",
                        body: "我演我事，用身边人、身边事教育大家。",
                    },
                    Block::Highlight {
                        label: "成果转化",
                        body: "形成可复制的指引与案例库，推广应用。",
                    },
                ],
            },
            Section {
                id: "review",
                title: "活动精彩瞬间回顾",
                numeral: None,
                blocks: vec![
                    Block::Card {
                        title: "编剧研讨",
                        body: "编剧团队深入研讨剧本细节，力求剧情真实、贴近工作。",
                    },
                    Block::Card {
                        title: "角色彩排",
                        body: "演员们全情投入，在彩排现场进行生动的角色互动与演绎。",
                    },
                    Block::Card {
                        title: "观众互动",
                        body: "活动现场设置互动环节，邀请观众点评，气氛热烈。",
                    },
                ],
            },
            Section {
                id: "future",
                title: "未来展望与总结",
                numeral: Some("七"),
                blocks: vec![
                    Block::Card {
                        title: "展望",
                        body: "持续深化情景剧普法形式，拓展应用场景，打造税务普法特色品牌。",
                    },
                    Block::Card {
                        title: "总结",
                        body: "以情景剧创新实践，\u{201c}演\u{201d}出规范执法新路径，\u{201c}视\u{201d}出税务服务新形象，为基层普法培训提供可靠借鉴模式。",
                    },
                    Block::Tagline("系列情景剧 · 创新普法形式 提升执法水平"),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_and_start_with_cover() {
        let article = tax_drama();
        let ids = article.section_ids();
        assert_eq!(ids.first(), Some(&"cover"));

        let mut seen = std::collections::HashSet::new();
        for id in &ids {
            assert!(seen.insert(*id), "duplicate section id {id}");
        }
    }

    #[test]
    fn toc_entries_point_at_existing_sections() {
        let article = tax_drama();
        let ids = article.section_ids();

        for section in &article.sections {
            for block in &section.blocks {
                if let Block::Toc(entries) = block {
                    for entry in entries {
                        assert!(
                            ids.contains(&entry.target),
                            "toc target {} has no section",
                            entry.target
                        );
                    }
                }
            }
        }
    }
}
