pub const PROMPT_TEMPLATE: &str = r#"
<example>
  <text>
  He parked behind his house.
  </text>
  <output>
  {
    "text": "He parked behind his house.",
    "translation": "他把车子停放在房子后面。",
    "vocabulary": [
      {
        "text": "park",
        "pronunciation": "pɑːk",
        "definitions": [
          {
            "definition": "停车",
            "type": "vi.",
            "examples": ["He parked behind his house."]
          },
          {
            "definition": "公园",
            "type": "n.",
            "examples": ["He parked in the park."]
          },
          {
            "definition": "停车场",
            "type": "n.",
            "examples": ["He parked his car in the parking lot."]
          }
        ]
      }
    ]
  }
  </output>
</example>
<text>{text}</text>
<instruction>
  翻译文本，并且满足以下要求：
  <requirement>
  1. 如果文本是除中文外的其他语言，翻译为中文，否则翻译为英文。
  2. 根据不同语境，在vocabulary中给出关键多义词或短语的不同含义或解释，帮助理解。
  3. 如果文本是日语，则单词部分使用假名表音。
  4. 如果文本是中文，则单词部分使用拼音表音。
  5. 如果文本只包含一个词语或者单词则只列出该词汇的含义，而不输出translation。
  6. 输出简洁明了。
  7. 只展示翻译结果和必要的多义解释，不添加额外内容。
  </requirement>
</instruction>
"#;

/// Wraps the caller's text in the fixed translation prompt.
///
/// The text is embedded verbatim.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(text: &str) -> String {
    // {text} is a placeholder for string replacement, not a format argument
    PROMPT_TEMPLATE.replacen("{text}", text, 1)
}
