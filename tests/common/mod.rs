use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn lj2hugo_cmd() -> Command {
    Command::cargo_bin("lj2hugo").unwrap()
}

/// Write an entry export and return its path.
pub fn write_entry(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, xml).unwrap();
    path
}

pub const ENTRY_XML: &str = r#"<?xml version="1.0"?>
<event>
  <itemid>1234</itemid>
  <subject>Cats &amp; dogs</subject>
  <eventtime>2008-05-17 16:20:00</eventtime>
  <event_timestamp>1211041200</event_timestamp>
  <url>http://example.livejournal.com/1234.html</url>
  <current_mood>happy</current_mood>
  <opt_preformatted>0</opt_preformatted>
  <props><taglist>life,park</taglist></props>
  <reply_count>3</reply_count>
  <picture_keyword>cat</picture_keyword>
  <event>Went to the park &amp;amp; fed the ducks.</event>
</event>"#;

// Not every test binary exercises comments
#[allow(dead_code)]
pub const COMMENTS_XML: &str = r#"<?xml version="1.0"?>
<comments>
  <comment>
    <subject>Re: Cats</subject>
    <user>friend</user>
    <id>1</id>
    <parentid></parentid>
    <state></state>
    <date>2008-05-18 09:00:00</date>
    <body>lovely day</body>
  </comment>
  <comment>
    <user>spammer</user>
    <id>2</id>
    <parentid>1</parentid>
    <state>S</state>
    <date>2008-05-18 10:00:00</date>
    <body>buy pills</body>
  </comment>
  <comment>
    <user>troll</user>
    <id>3</id>
    <parentid></parentid>
    <state>B</state>
    <date>2008-05-18 11:00:00</date>
    <body>first</body>
  </comment>
  <comment>
    <user>regretful</user>
    <id>4</id>
    <parentid></parentid>
    <state>D</state>
    <date>2008-05-18 12:00:00</date>
    <body>never mind</body>
  </comment>
</comments>"#;
