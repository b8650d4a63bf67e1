//! Static kana data: level progression, romaji, katakana projection and
//! visually similar groups.

/// Hiragana introduced at each level (index 0 = level 1)
pub const HIRAGANA_LEVELS: &[&[&str]] = &[
    &["あ", "い", "う", "え", "お", "ん"],
    &["か", "き", "く", "け", "こ"],
    &["さ", "し", "す", "せ", "そ"],
    &["た", "ち", "つ", "て", "と", "っ"],
    &["な", "に", "ぬ", "ね", "の"],
    &["は", "ひ", "ふ", "へ", "ほ"],
    &["ま", "み", "む", "め", "も"],
    &["や", "ゆ", "よ"],
    &["ら", "り", "る", "れ", "ろ"],
    &["わ", "を", "ん"],
    &["が", "ぎ", "ぐ", "げ", "ご"],
    &["ざ", "じ", "ず", "ぜ", "ぞ"],
    &["だ", "ぢ", "づ", "で", "ど"],
    &["ば", "び", "ぶ", "べ", "ぼ"],
    &["ぱ", "ぴ", "ぷ", "ぺ", "ぽ"],
    &["きょ", "きゅ", "きゃ", "しょ", "しゅ", "しゃ"],
    &["ちょ", "ちゅ", "ちゃ", "にょ", "にゅ", "にゃ"],
    &["ひょ", "ひゅ", "ひゃ", "みょ", "みゅ", "みゃ"],
    &["りょ", "りゅ", "りゃ"],
    &["ぎょ", "ぎゅ", "ぎゃ", "じょ", "じゅ", "じゃ"],
    &["びょ", "びゅ", "びゃ", "ぢょ", "ぢゅ", "ぢゃ"],
    &["ぴょ", "ぴゅ", "ぴゃ"],
];

/// (hiragana, romaji)
#[rustfmt::skip]
pub const HIRAGANA_ROMAJI: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"), ("ん", "n"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"), ("っ", "tsu"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "dji"), ("づ", "dzu"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("ぢゃ", "ja"), ("ぢゅ", "ju"), ("ぢょ", "jo"),
];

/// (hiragana, katakana)
#[rustfmt::skip]
pub const HIRAGANA_TO_KATAKANA: &[(&str, &str)] = &[
    ("あ", "ア"), ("い", "イ"), ("う", "ウ"), ("え", "エ"), ("お", "オ"),
    ("か", "カ"), ("き", "キ"), ("く", "ク"), ("け", "ケ"), ("こ", "コ"),
    ("さ", "サ"), ("し", "シ"), ("す", "ス"), ("せ", "セ"), ("そ", "ソ"),
    ("た", "タ"), ("ち", "チ"), ("つ", "ツ"), ("て", "テ"), ("と", "ト"),
    ("な", "ナ"), ("に", "ニ"), ("ぬ", "ヌ"), ("ね", "ネ"), ("の", "ノ"),
    ("は", "ハ"), ("ひ", "ヒ"), ("ふ", "フ"), ("へ", "ヘ"), ("ほ", "ホ"),
    ("ま", "マ"), ("み", "ミ"), ("む", "ム"), ("め", "メ"), ("も", "モ"),
    ("や", "ヤ"), ("ゆ", "ユ"), ("よ", "ヨ"),
    ("ら", "ラ"), ("り", "リ"), ("る", "ル"), ("れ", "レ"), ("ろ", "ロ"),
    ("わ", "ワ"), ("を", "ヲ"), ("ん", "ン"),
    ("が", "ガ"), ("ぎ", "ギ"), ("ぐ", "グ"), ("げ", "ゲ"), ("ご", "ゴ"),
    ("ざ", "ザ"), ("じ", "ジ"), ("ず", "ズ"), ("ぜ", "ゼ"), ("ぞ", "ゾ"),
    ("だ", "ダ"), ("ぢ", "ヂ"), ("づ", "ヅ"), ("で", "デ"), ("ど", "ド"),
    ("ば", "バ"), ("び", "ビ"), ("ぶ", "ブ"), ("べ", "ベ"), ("ぼ", "ボ"),
    ("ぱ", "パ"), ("ぴ", "ピ"), ("ぷ", "プ"), ("ぺ", "ペ"), ("ぽ", "ポ"),
    ("ゃ", "ャ"), ("ゅ", "ュ"), ("ょ", "ョ"), ("っ", "ッ"),
];

/// Hiragana that are easy to confuse with each other
pub const SIMILAR_HIRAGANA: &[&[&str]] = &[
    &["あ", "お"],
    &["い", "り"],
    &["き", "さ"],
    &["け", "は"],
    &["さ", "ち"],
    &["す", "ぬ"],
    &["つ", "し"],
    &["つ", "う"],
    &["な", "た"],
    &["に", "こ"],
    &["ぬ", "め"],
    &["ね", "れ"],
    &["の", "ぬ"],
    &["は", "ほ"],
    &["め", "ぬ"],
    &["る", "ろ"],
    &["わ", "れ"],
];

/// Katakana that are easy to confuse with each other
pub const SIMILAR_KATAKANA: &[&[&str]] = &[
    &["ウ", "フ"],
    &["シ", "ツ", "ソ", "ン"],
    &["ノ", "ソ", "ン"],
    &["ス", "ヌ"],
    &["チ", "セ"],
    &["チ", "テ"],
    &["テ", "ナ"],
    &["ノ", "フ"],
    &["ノ", "メ"],
    &["メ", "ヌ"],
    &["ワ", "ク"],
];

/// Look-alikes across the two scripts (searched after both lists above)
pub const SIMILAR_ACROSS_SCRIPTS: &[&[&str]] = &[
    &["く", "ク"],
    &["せ", "サ"],
    &["さ", "サ"],
    &["き", "キ"],
    &["り", "リ"],
    &["ち", "チ"],
    &["に", "ニ"],
    &["の", "ノ"],
];
