use std::sync::Arc;

use cobald_core::{parse, Vocabulary};
use cobald_engine::Session;

/// Three-sentence corpus; the first sentence is already checked
#[allow(dead_code)]
pub const CORPUS: &str = "# sent_id = s1\n\
# text = Hello world\n\
# checked = true\n\
1\tHello\thello\tINTJ\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
2\tworld\tworld\tNOUN\t_\t_\t1\tdep\t_\t_\tSLOT2\tCLASS2\n\
\n\
# sent_id = s2\n\
1\tOne\tone\tNUM\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
2\ttwo\ttwo\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT1\tCLASS1\n\
3\tthree\tthree\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT1\tCLASS1\n\
4\tfour\tfour\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT1\tCLASS1\n\
5\tfive\tfive\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT1\tCLASS1\n\
\n\
# sent_id = s3\n\
1\tBye\tbye\tINTJ\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
\n";

#[allow(dead_code)]
pub fn test_vocab() -> Arc<Vocabulary> {
    Arc::new(Vocabulary::from_lists(
        &["SLOT1", "SLOT2"],
        &["CLASS1", "CLASS2"],
        &["root", "dep"],
        &["INTJ", "NOUN", "NUM"],
        &["Case", "Number"],
    ))
}

#[allow(dead_code)]
pub fn new_session() -> Session {
    Session::new(parse(CORPUS).expect("fixture parses"), test_vocab())
}
