use cobald_core::model::{Deps, EnhancedDep, Governor, Head};
use cobald_core::{Document, Identifier, Sentence, Token, Vocabulary};
use proptest::prelude::*;

/// One-sentence corpus with two annotated words
#[allow(dead_code)]
pub const SCENARIO_A: &str = "# sent_id = s1\n\
# text = Hello world\n\
1\tHello\thello\tINTJ\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
2\tworld\tworld\tNOUN\t_\t_\t1\tdep\t_\t_\tSLOT2\tCLASS2\n\
\n";

/// Vocabulary covering the labels used by `SCENARIO_A`
#[allow(dead_code)]
pub fn test_vocab() -> Vocabulary {
    Vocabulary::from_lists(
        &["SLOT1", "SLOT2"],
        &["CLASS1", "CLASS2"],
        &["root", "dep"],
        &["INTJ", "NOUN"],
        &["Case", "Number"],
    )
}

/// Sentence `s1` with blank tokens carrying the given identifiers
#[allow(dead_code)]
pub fn sentence_from(ids: &[&str]) -> Sentence {
    let mut sentence = Sentence::new("s1");
    for id in ids {
        sentence.tokens.push(Token::blank(id.parse().unwrap()));
    }
    sentence
}

#[allow(dead_code)]
pub fn ids_of(sentence: &Sentence) -> Vec<String> {
    sentence.tokens.iter().map(|t| t.id.to_string()).collect()
}

#[allow(dead_code)]
fn build_sentence(
    words: u32,
    heads: Vec<u32>,
    empty_nodes: Vec<u32>,
    range_start: Option<u32>,
    forms: Vec<String>,
    with_deps: Vec<bool>,
) -> Sentence {
    let mut sentence = Sentence::new("s1");
    for n in 1..=words {
        let i = (n - 1) as usize;
        if range_start == Some(n) && n < words {
            sentence
                .tokens
                .push(Token::blank(Identifier::Range { low: n, high: n + 1 }));
        }

        let mut word = Token::blank(Identifier::Integer(n));
        word.form = forms[i].clone();
        word.deprel = "dep".to_string();
        let governor = match heads[i] {
            0 => {
                word.head = Head::Root;
                Governor::Root
            }
            h => {
                word.head = Head::Token(h);
                Governor::Node(Identifier::Integer(h))
            }
        };
        if with_deps[i] {
            word.deps = Deps::List(vec![EnhancedDep {
                governor,
                relation: "dep".to_string(),
            }]);
        }
        sentence.tokens.push(word);

        for minor in 1..=empty_nodes[i] {
            let mut node = Token::blank(Identifier::Decimal { base: n, minor });
            node.form = format!("e{}", minor);
            node.deps = Deps::List(vec![EnhancedDep {
                governor: Governor::Node(Identifier::Integer(n)),
                relation: "ref".to_string(),
            }]);
            sentence.tokens.push(node);
        }
    }
    sentence
}

/// Well-formed sentence: words 1..=n in order, optional empty nodes after
/// each word, at most one two-word range, heads and deps inside the sentence
#[allow(dead_code)]
pub fn arb_sentence() -> impl Strategy<Value = Sentence> {
    (1u32..8)
        .prop_flat_map(|words| {
            let n = words as usize;
            (
                Just(words),
                proptest::collection::vec(0..=words, n),
                proptest::collection::vec(0u32..3, n),
                proptest::option::of(1..=words),
                proptest::collection::vec("[a-z]{1,6}", n),
                proptest::collection::vec(any::<bool>(), n),
            )
        })
        .prop_map(|(words, heads, empty_nodes, range_start, forms, with_deps)| {
            build_sentence(words, heads, empty_nodes, range_start, forms, with_deps)
        })
}

/// Well-formed document: unique sentence ids, and the translation flag set
/// exactly when a sentence carries a translation
#[allow(dead_code)]
pub fn arb_document() -> impl Strategy<Value = Document> {
    proptest::collection::vec(
        (
            arb_sentence(),
            proptest::option::of("[A-Za-z ,.]{1,20}"),
            proptest::option::of("[a-z =]{1,12}"),
            any::<bool>(),
            "[a-z\\\\\n]{0,8}",
        ),
        1..4,
    )
    .prop_map(|items| {
        let mut doc = Document::new();
        for (i, (base, text, translation, checked, comment)) in items.into_iter().enumerate() {
            let mut sentence = Sentence::new(format!("s{}", i + 1));
            sentence.tokens = base.tokens;
            sentence.text = text;
            sentence.translation = translation;
            sentence.checked = checked;
            sentence.comment = comment;
            if sentence.translation.is_some() {
                doc.has_translations = true;
            }
            doc.push(sentence).unwrap();
        }
        doc
    })
}
