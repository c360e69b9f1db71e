use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Two-sentence corpus with a translation on the second sentence
#[allow(dead_code)]
pub const CORPUS: &str = "# global.columns = ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC SEMSLOT SEMCLASS\n\
# sent_id = s1\n\
# text = Hello world\n\
1\tHello\thello\tINTJ\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
2\tworld\tworld\tNOUN\t_\t_\t1\tdep\t_\t_\tSLOT2\tCLASS2\n\
\n\
# sent_id = s2\n\
# text = Bye\n\
# text_ru = Poka\n\
1\tBye\tbye\tINTJ\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
\n";

/// Write `content` into a fresh temp dir, returning the dir guard and path
#[allow(dead_code)]
pub fn write_temp(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}
