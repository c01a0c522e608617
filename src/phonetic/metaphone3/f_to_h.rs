//! Rules for 'F', 'G' and 'H'.
//!
//! 'G' carries the largest share of exceptions in the ruleset: whether it is
//! hard or soft before a front vowel, silent or 'F' in "-GH-", and silent
//! before 'N' all depend on word origin more than on spelling.

use super::Metaphone3;

/// Names with a soft initial 'G' before 'E', 'I' or 'Y'.
const INITIAL_SOFT_G: &[&str] = &[
    "EL", "EM", "EN", "EO", "ER", "ES", "IA", "IN", "IO", "IP", "IU", "YM", "YN", "YP", "YR",
    "EE", "IRA", "IRO",
];

/// Exceptions to [`INITIAL_SOFT_G`] where the 'G' stays hard.
const INITIAL_HARD_G: &[&str] = &[
    "ELD", "ELT", "ERT", "INZ", "ERH", "ITE", "ERD", "ERL", "ERN", "INT", "EES", "EEK", "ELB",
    "EER", "ERSH", "ERST", "INSB", "INGR", "EROW", "ERKE", "EREN", "ELLER", "ERDIE", "ERBER",
    "ESUND", "ESNER", "INGKO", "INKGO", "IPPER", "ESELL", "IPSON", "EEZER", "ERSON", "ELMAN",
    "ESTALT", "ESTAPO", "INGHAM", "ERRITY", "ERRISH", "ESSNER", "ENGLER", "YNAECOL", "YNECOLO",
    "ENTHNER", "ERAGHTY", "INGERICH", "EOGHEGAN",
];

impl Metaphone3 {
    // ==================================================================
    // F
    // ==================================================================

    pub(super) fn encode_f(&mut self) {
        let c = self.current;
        // 'often' is also said with a 'T'
        if self.string_at(c - 1, &["OFTEN"]) {
            self.keys.add_alt("F", "FT");
            self.current += 1;
            return;
        }

        if self.char_at(c + 1) == 'F' {
            self.current += 1;
        }
        self.keys.add("F");
    }

    // ==================================================================
    // G
    // ==================================================================

    pub(super) fn encode_g(&mut self) {
        if self.encode_silent_g_at_beginning()
            || self.encode_gg()
            || self.encode_gk()
            || self.encode_gh()
            || self.encode_silent_g()
            || self.encode_gn()
            || self.encode_gl()
            || self.encode_initial_g_front_vowel()
            || self.encode_nger()
            || self.encode_ger()
            || self.encode_gel()
            || self.encode_non_initial_g_front_vowel()
            || self.encode_ga_to_j()
        {
            return;
        }

        let c = self.current;
        if !self.string_at(c - 1, &["C", "K", "G", "Q"]) {
            self.keys.add_exact("G", "K");
        }
    }

    /// 'G' heard as 'K', or as 'G' and 'J' when the word may be English.
    fn add_hard_g(&mut self) {
        if self.word.slavo_germanic() {
            self.keys.add_exact("G", "K");
        } else {
            self.keys.add_exact_alt("G", "J", "K", "J");
        }
    }

    /// Soft 'G' with the hard reading as the alternate.
    fn add_soft_g(&mut self) {
        self.keys.add_exact_alt("J", "G", "J", "K");
    }

    #[inline]
    fn front_vowel(&self, at: isize) -> bool {
        matches!(self.char_at(at), 'E' | 'I' | 'Y')
    }

    fn encode_silent_g_at_beginning(&mut self) -> bool {
        self.current == 0 && self.string_at(0, &["GN"])
    }

    fn encode_gg(&mut self) -> bool {
        let c = self.current;
        if self.char_at(c + 1) != 'G' {
            return false;
        }
        // italian 'loggia', 'reggio', and 'suggest'
        if self.string_at(c - 1, &["AGGIA", "OGGIA", "AGGIO", "EGGIO", "EGGIA", "IGGIO"])
            || (self.string_at(c - 1, &["UGGIE"]) && !(c + 3 == self.last || c + 4 == self.last))
            || self.string_at_end(c - 1, &["AGGI", "OGGI"])
            || self.string_at(c - 2, &["SUGGES", "XAGGER", "REGGIE"])
        {
            if self.string_at(c - 2, &["SUGGEST"]) {
                self.keys.add_exact("G", "K");
            }
            self.keys.add("J");
            self.advance(2, 1);
        } else {
            self.keys.add_exact("G", "K");
            self.current += 1;
        }
        true
    }

    fn encode_gk(&mut self) -> bool {
        // 'gingko'
        if self.char_at(self.current + 1) == 'K' {
            self.keys.add("K");
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_gh(&mut self) -> bool {
        if self.char_at(self.current + 1) != 'H' {
            return false;
        }
        if self.encode_gh_after_consonant()
            || self.encode_initial_gh()
            || self.encode_gh_to_j()
            || self.encode_gh_to_h()
            || self.encode_ught()
            || self.encode_gh_h_part_of_other_word()
            || self.encode_silent_gh()
            || self.encode_gh_to_f()
        {
            return true;
        }
        self.keys.add_exact("G", "K");
        self.current += 1;
        true
    }

    fn encode_gh_after_consonant(&mut self) -> bool {
        let c = self.current;
        // 'burgher', but not the welsh 'halgh'
        if c > 0 && !self.is_vowel(c - 1) && !self.string_at_end(c - 3, &["HALGH"]) {
            self.keys.add_exact("G", "K");
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_initial_gh(&mut self) -> bool {
        let c = self.current;
        if c != 0 {
            return false;
        }
        // 'ghislane', 'ghiradelli'
        if self.char_at(c + 2) == 'I' {
            self.keys.add("J");
        } else {
            self.keys.add_exact("G", "K");
        }
        self.current += 1;
        true
    }

    fn encode_gh_to_j(&mut self) -> bool {
        let c = self.current;
        // welsh 'greenhalgh'
        if self.string_at_end(c - 2, &["ALGH"]) {
            self.keys.add_alt("J", "");
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_gh_to_h(&mut self) -> bool {
        let c = self.current;
        // irish 'donaghue', 'callaghan'
        if (self.string_at(c - 4, &["DONO", "DONA"]) && self.is_vowel(c + 2))
            || self.string_at(c - 5, &["CALLAGHAN"])
        {
            self.keys.add("H");
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_ught(&mut self) -> bool {
        let c = self.current;
        if !self.string_at(c - 1, &["UGHT"]) {
            return false;
        }
        // 'laughter', 'draught' against 'caught', 'slaughter'
        if (self.string_at(c - 3, &["LAUGH"])
            && !(self.string_at(c - 4, &["SLAUGHT"]) || self.string_at(c - 3, &["LAUGHTO"])))
            || self.string_at(c - 4, &["DRAUGH"])
        {
            self.keys.add("FT");
        } else {
            self.keys.add("T");
        }
        self.current += 2;
        true
    }

    fn encode_gh_h_part_of_other_word(&mut self) -> bool {
        let c = self.current;
        // 'bighead', 'doghouse'
        if self.string_at(c + 1, &["HOUS", "HEAD", "HOLE", "HORN", "HARN"]) {
            self.keys.add_exact("G", "K");
            self.current += 1;
            return true;
        }
        false
    }

    /// 'night', 'weigh', 'dough'
    fn encode_silent_gh(&mut self) -> bool {
        let c = self.current;
        let silent_context = self.string_at(c - 2, &["B", "H", "D", "G", "L"])
            || (self.string_at(c - 3, &["B", "H", "D", "K", "W", "N", "P", "V"])
                && !self.string_start(&["ENOUGH"]))
            || self.string_at(c - 4, &["B", "H", "PL", "SL"])
            || (c > 0
                && (self.char_at(c - 1) == 'I'
                    || self.string_start(&["PUGH"])
                    || self.string_at_end(c - 1, &["AGH"])
                    || self.string_at(c - 4, &["GERAGH", "DRAUGH"])
                    || (self.string_at(c - 3, &["GAUGH", "GEOGH", "MAUGH"])
                        && !self.string_start(&["MCGAUGHEY"]))
                    || (self.string_at(c - 2, &["OUGH"])
                        && c > 3
                        && !self.string_at(c - 4, &["CCOUGH", "ENOUGH", "TROUGH", "CLOUGH"]))));
        let silent_ending = self.string_at(c - 3, &["VAUGH", "FEIGH", "LEIGH"])
            || self.string_at(c - 2, &["HIGH", "TIGH"])
            || c + 1 == self.last
            || (self.string_at_end(c + 2, &["IE", "EY", "ES", "ER", "ED", "TY"])
                && !self.string_at(c - 5, &["GALLAGHER"]))
            || self.string_at_end(c + 2, &["Y", "ING", "OUT", "ERTY"])
            || (!self.is_vowel(c + 2)
                || self.string_at(c - 3, &["GAUGH", "GEOGH", "MAUGH"])
                || self.string_at(c - 4, &["BROUGHAM"]));
        if silent_context
            && silent_ending
            && !(self.string_start(&["BALOGH", "SABAGH"])
                || self.string_at(c - 2, &["BAGHDAD"])
                || self.string_at(c - 3, &["WHIGH"])
                || self.string_at(c - 5, &["SABBAGH", "AKHLAGH"]))
        {
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_gh_special_cases(&mut self) -> bool {
        let c = self.current;
        // 'hiccough' == 'hiccup'
        if self.string_at(c - 6, &["HICCOUGH"]) {
            self.keys.add("P");
        } else if self.string_start(&["LOUGH"]) {
            // scots 'loch'
            self.keys.add("K");
        } else if self.string_start(&["BALOGH"]) {
            // hungarian
            self.keys.add_exact_alt("G", "", "K", "");
        } else if self.string_at(c - 3, &["LAUGHLIN", "COUGHLAN", "LOUGHLIN"]) {
            self.keys.add_alt("K", "F");
        } else if self.string_at(c - 3, &["GOUGH"]) || self.string_at(c - 7, &["COLCLOUGH"]) {
            self.keys.add_alt("", "F");
        } else {
            return false;
        }
        self.current += 1;
        true
    }

    /// 'cough', 'laugh', 'tough'
    fn encode_gh_to_f(&mut self) -> bool {
        if self.encode_gh_special_cases() {
            return true;
        }
        let c = self.current;
        if c > 2
            && self.char_at(c - 1) == 'U'
            && self.is_vowel(c - 2)
            && self.string_at(c - 3, &["C", "G", "L", "R", "T", "N", "S"])
            && !self.string_at(c - 4, &["BREUGHEL", "FLAUGHER"])
        {
            self.keys.add("F");
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_silent_g(&mut self) -> bool {
        let c = self.current;
        // 'phlegm', 'apothegm', 'voigt'
        if self.string_at_end(c - 1, &["EGM", "IGM", "AGM"])
            || self.string_at_end(c, &["GT"])
            || self.string_exact(&["HUGES"])
        {
            return true;
        }
        // vietnamese names such as "Nguyen", but not "Ng"
        self.string_start(&["NG"]) && c != self.last
    }

    fn encode_gn(&mut self) -> bool {
        let c = self.current;
        if self.char_at(c + 1) != 'N' {
            return false;
        }
        // 'align', 'cognac', 'bologna' against 'cognate', 'signal'
        if (c > 1
            && ((self.string_at(c - 1, &["I", "U", "E"])
                || self.string_at(c - 3, &["CHAGNON", "LORGNETTE"])
                || self.string_at(c - 2, &["COGNAC", "LAGNIAPPE"])
                || self.string_at(c - 4, &["BOLOGN"])
                || self.string_at(c - 5, &["COMPAGNIE"]))
                && !(self.string_at(c + 2, &["ATE", "ITY", "ATOR", "ATION"])
                    || (self.string_at(c + 2, &["AN", "AC", "IA", "UM"])
                        && !(self.string_at(c - 3, &["POIGNANT"])
                            || self.string_at(c - 2, &["COGNAC"])))
                    || self.string_start(&["SPIGNER", "STEGNER"])
                    || self.string_exact(&["SIGNE"])
                    || self.string_at(
                        c - 2,
                        &[
                            "LIGNI", "LIGNO", "REGNA", "DIGNI", "WEGNE", "TIGNE", "RIGNE", "REGNE",
                            "TIGNO", "SIGNAL", "SIGNIF", "SIGNAT",
                        ],
                    )
                    || self.string_at(c - 1, &["IGNIT"]))
                && !self.string_at(c - 2, &["SIGNET", "LIGNEO"])))
            // italian 'compagne', 'campagna'
            || (self.string_at_end(c, &["GNE", "GNA"])
                && !self.string_at(c - 2, &["SIGNA", "MAGNA", "SIGNE"]))
        {
            self.keys.add_exact_alt("N", "GN", "N", "KN");
        } else {
            self.keys.add_exact("GN", "KN");
        }
        self.current += 1;
        true
    }

    /// 'tagliaro', 'puglia'
    fn encode_gl(&mut self) -> bool {
        let c = self.current;
        if self.string_at(c + 1, &["LIA", "LIO", "LIE"]) && self.is_vowel(c - 1) {
            self.keys.add_exact_alt("L", "GL", "L", "KL");
            self.current += 1;
            return true;
        }
        false
    }

    fn encode_initial_g_front_vowel(&mut self) -> bool {
        let c = self.current;
        if !(c == 0 && self.front_vowel(c + 1)) {
            return false;
        }
        if self.string_exact(&["GILA"]) {
            // the lizard and the river
            self.keys.add("H");
        } else if self.initial_g_soft() {
            self.add_soft_g();
        } else if self.char_at(c + 1) == 'E' || self.char_at(c + 1) == 'I' {
            self.keys.add_exact_alt("G", "J", "K", "J");
        } else {
            self.keys.add_exact("G", "K");
        }
        self.advance(1, 0);
        true
    }

    fn initial_g_soft(&self) -> bool {
        let c = self.current;
        (self.string_at(c + 1, INITIAL_SOFT_G) && !self.string_at(c + 1, INITIAL_HARD_G))
            || (self.is_vowel(c + 1)
                && (self.string_at(c + 1, &["EE ", "EEW"])
                    || (self.string_at(c + 1, &["IGI", "IRA", "IBE", "AOL", "IDE", "IGL"])
                        && !self.string_at(c + 1, &["IDEON"]))
                    || self.string_at(
                        c + 1,
                        &[
                            "ILES", "INGI", "ISEL", "IBBER", "IBBET", "IBLET", "IBRAN", "IGOLO",
                            "IRARD", "IGANT", "IRAFFE", "EEWHIZ", "ILLETTE", "IBRALTA",
                        ],
                    )
                    || (self.string_at(c + 1, &["INGER"]) && !self.string_at(c + 1, &["INGERICH"]))))
    }

    /// '-nger-': soft in 'danger', 'ginger', hard in 'finger', 'hunger'
    fn encode_nger(&mut self) -> bool {
        let c = self.current;
        if !self.string_at(c - 1, &["NGER"]) {
            return false;
        }
        let hard = self.word.root_or_inflections("ANGER")
            || self.word.root_or_inflections("LINGER")
            || self.word.root_or_inflections("MALINGER")
            || self.word.root_or_inflections("FINGER")
            || (self.string_at(
                c - 3,
                &[
                    "HUNG", "FING", "BUNG", "WING", "RING", "DING", "ZENG", "ZING", "JUNG", "LONG",
                    "PING", "CONG", "MONG", "BANG", "GANG", "HANG", "LANG", "SANG", "SING", "WANG",
                    "ZANG",
                ],
            ) && !(self.string_at(
                c - 6,
                &["BOULANG", "SLESING", "KISSING", "DERRING", "BARRING", "PHALANGER"],
            ) || self.string_at(c - 8, &["SCHLESING"])
                || self.string_at(c - 5, &["SALING", "BELANG"])
                || self.string_at(c - 4, &["CHANG"])))
            || self.string_at(c - 4, &["STING", "YOUNG"])
            || self.string_at(c - 5, &["STRONG"])
            || self.string_start(&["UNG", "ENG", "ING", "SENGER"])
            || self.string_at(c, &["GERICH"])
            || self.string_at(c - 2, &["ANGERLY", "ANGERBO", "INGERSO"])
            || self.string_at(c - 3, &["WENGER", "MUNGER", "SONGER", "KINGER", "LINGERF"])
            || self.string_at(
                c - 4,
                &["FLINGER", "SLINGER", "STANGER", "STENGER", "KLINGER", "CLINGER"],
            )
            || self.string_at(c - 5, &["SPRINGER", "SPRENGER"]);
        if hard {
            self.keys.add_exact_alt("G", "J", "K", "J");
        } else {
            self.add_soft_g();
        }
        self.advance(1, 0);
        true
    }

    /// '-ger-': soft in 'danger', hard in German names such as 'berger'
    fn encode_ger(&mut self) -> bool {
        let c = self.current;
        if !(c > 0 && self.string_at(c + 1, &["ER"])) {
            return false;
        }
        if (((c == 2
            && self.is_vowel(c - 1)
            && !self.is_vowel(c - 2)
            && !self.string_at(c - 2, &["PAGER", "WAGER", "NIGER", "ROGER", "LEGER", "CAGER"]))
            || self.string_at(c - 2, &["AUGER", "EAGER", "INGER", "YAGER"]))
            || self.string_at(
                c - 3,
                &[
                    "SEEGER", "JAEGER", "GEIGER", "KRUGER", "SAUGER", "BURGER", "MEAGER", "MARGER",
                    "RIEGER", "YAEGER", "STEGER", "PRAGER", "SWIGER", "YERGER", "TORGER", "FERGER",
                    "HILGER", "ZEIGER", "YARGER", "COWGER", "CREGER", "KROGER", "KREGER", "GRAGER",
                    "STIGER", "BERGER",
                ],
            )
            // 'berger' at the end, but not 'bergerac'
            || self.string_at_end(c - 3, &["BERGER"])
            || self.string_at(
                c - 4,
                &[
                    "KREIGER", "KRUEGER", "METZGER", "KRIEGER", "KROEGER", "STEIGER", "DRAEGER",
                    "BUERGER", "BOERGER", "FIBIGER",
                ],
            )
            || (self.string_at(c - 3, &["BARGER"]) && c > 4)
            || (self.string_at(c, &["GERBER"]) && c > 0)
            || self.string_at(c - 5, &["SCHWAGER", "LYBARGER", "SPRENGER", "GALLAGER", "WILLIGER"])
            || self.string_start(&["HARGER"])
            || self.string_exact(&["AGER", "EGER"])
            || self.string_at(c - 1, &["YGERNE"])
            || self.string_at(c - 6, &["SCHWEIGER"]))
            && !(self.string_at(c - 5, &["BELLIGEREN"])
                || self.string_start(&["MARGERY"])
                || self.string_at(c - 3, &["BERGERAC"]))
        {
            self.add_hard_g();
        } else {
            self.add_soft_g();
        }
        self.advance(1, 0);
        true
    }

    /// '-gel-': 'angel' against 'engel', 'nagel'
    fn encode_gel(&mut self) -> bool {
        let c = self.current;
        if !(self.string_at(c + 1, &["EL"]) && c > 0) {
            return false;
        }
        if (self.length() == 5
            && self.is_vowel(c - 1)
            && !self.is_vowel(c - 2)
            && !self.string_at(c - 2, &["NIGEL", "RIGEL"]))
            || self.string_at(c - 2, &["ENGEL", "HEGEL", "NAGEL", "VOGEL"])
            || self.string_at(
                c - 3,
                &["MANGEL", "WEIGEL", "FLUGEL", "RANGEL", "HAUGEN", "RIEGEL", "VOEGEL"],
            )
            || self.string_at(c - 4, &["SPEIGEL", "STEIGEL", "WRANGEL", "SPIEGEL", "DANEGELD"])
        {
            self.add_hard_g();
        } else {
            self.add_soft_g();
        }
        self.advance(1, 0);
        true
    }

    fn encode_non_initial_g_front_vowel(&mut self) -> bool {
        let c = self.current;
        if !self.string_at(c + 1, &["E", "I", "Y"]) {
            return false;
        }
        if self.string_at_end(c, &["GE"]) {
            // final '-ge' is soft except in some names
            if self.string_start(&[
                "INGE", "LAGE", "HAGE", "LANGE", "SYNGE", "BENGE", "RUNGE", "HELGE", "BYRGE",
                "BIRGE", "BERGE", "HAUGE", "RENEGE", "STONGE", "STANGE", "PRANGE", "KRESGE",
            ]) {
                self.add_hard_g();
            } else {
                self.keys.add("J");
            }
        } else if self.internal_hard_g() {
            // 'mcgee' and 'mcgill' were encoded under 'M'
            if !(c == 2 && self.string_start(&["MC"])) || (c == 3 && self.string_start(&["MAC"]))
            {
                self.add_hard_g();
            }
        } else {
            self.add_soft_g();
        }
        self.advance(1, 0);
        true
    }

    fn internal_hard_g(&self) -> bool {
        let c = self.current;
        // final '-ge' is never hard here
        !(c + 1 == self.last && self.char_at(c + 1) == 'E')
            && (self.internal_hard_ng()
                || self.internal_hard_gen_gin_get_git()
                || self.internal_hard_g_open_syllable()
                || self.internal_hard_g_other())
    }

    /// 'singer', 'longing', 'dingy' is soft
    fn internal_hard_ng(&self) -> bool {
        let c = self.current;
        (self.string_at(c - 3, &["DANG", "FANG", "SING"]) && !self.string_at(c - 5, &["DISINGEN"]))
            || self.string_start(&["INGEB", "ENGEB"])
            || (self.string_at(c - 3, &["RING", "WING", "HANG", "LONG"])
                && !(self.string_at(c - 4, &["CRING", "FRING", "ORANG", "TWING", "CHANG", "PHANG"])
                    || self.string_at(c - 5, &["SYRING"])
                    || self.string_at(c - 3, &["RINGENC", "RINGENT", "LONGITU", "LONGEVI"])
                    || self.string_at_end(c, &["GELO", "GINO"])))
            || (self.string_at(c - 1, &["NGY"])
                && !(self.string_at(c - 3, &["RANGY", "MANGY", "MINGY"])
                    || self.string_at(c - 4, &["SPONGY", "STINGY"])))
    }

    /// 'forget', 'target', 'begin', and German names ending '-gen'
    fn internal_hard_gen_gin_get_git(&self) -> bool {
        let c = self.current;
        (self.string_at(
            c - 3,
            &[
                "FORGET", "TARGET", "MARGIT", "MARGET", "TURGEN", "BERGEN", "MORGEN", "JORGEN",
                "HAUGEN", "JERGEN", "JURGEN", "LINGEN", "BORGEN", "LANGEN", "KLAGEN", "STIGER",
                "BERGER",
            ],
        ) && !self.string_at(c, &["GENETIC", "GENESIS"])
            && !self.string_at(c - 4, &["PLANGENT"]))
            || self.string_at_end(c - 3, &["BERGIN", "FEAGIN", "DURGIN"])
            || (self.string_at(c - 2, &["ENGEN"]) && !self.string_at(c + 3, &["DER", "ETI", "ESI"]))
            || self.string_at(c - 4, &["JUERGEN"])
            || self.string_start(&["NAGIN", "MAGIN", "HAGIN"])
            || self.string_exact(&["ENGIN", "DEGEN", "LAGEN", "MAGEN", "NAGIN"])
            || (self.string_at(
                c - 2,
                &["BEGET", "BEGIN", "HAGEN", "FAGIN", "BOGEN", "WIGIN", "NTGEN", "EIGEN", "WEGEN", "WAGEN"],
            ) && !self.string_at(c - 5, &["OSPHAGEN"]))
    }

    /// 'yogi', 'fogy', 'carnegie'
    fn internal_hard_g_open_syllable(&self) -> bool {
        let c = self.current;
        self.string_at(c + 1, &["EYE"])
            || self.string_at(c - 2, &["FOGY", "POGY", "YOGI", "MAGEE", "MCGEE", "HAGIO"])
            || self.string_at(c - 1, &["RGEY", "OGEY"])
            || self.string_at(c - 3, &["HOAGY", "STOGY", "PORGY"])
            || self.string_at(c - 5, &["CARNEGIE"])
            || self.string_at_end(c - 1, &["OGEY", "OGIE"])
    }

    fn internal_hard_g_other(&self) -> bool {
        let c = self.current;
        (self.string_at(
            c,
            &[
                "GETH", "GEAR", "GEIS", "GIRL", "GIVI", "GIVE", "GIFT", "GIRD", "GIRT", "GILV",
                "GILD", "GELD",
            ],
        ) && !self.string_at(c - 3, &["GINGIV"]))
            // "-ish" as in 'piggish'
            || (self.string_at(c + 1, &["ISH"]) && c > 0 && !self.string_start(&["LARG"]))
            || (self.string_at(c - 2, &["MAGED", "MEGID"]) && c + 2 != self.last)
            || self.string_at(c, &["GEZ"])
            || self.string_start(&["WEGE", "HAGE", "VOEGE", "BERGE", "HELGE", "INGEBORG", "CORREGIDOR"])
            || (self.string_at_end(c - 2, &["ONGEST", "UNGEST"]) && !self.string_at(c - 3, &["CONGEST"]))
            || self.string_exact(&["ENGE", "BOGY"])
            || self.string_at(c, &["GIBBON"])
            || (self.string_at(c, &["GILL"])
                && (c + 3 == self.last || c + 4 == self.last)
                && !self.string_start(&["STURGILL"]))
    }

    /// 'margarine', 'algae', 'gaol'
    fn encode_ga_to_j(&mut self) -> bool {
        let c = self.current;
        if (self.string_at(c - 3, &["MARGARY", "MARGARI"]) && !self.string_at(c - 3, &["MARGARIT"]))
            || self.string_start(&["GAOL"])
            || self.string_at(c - 2, &["ALGAE"])
        {
            self.add_soft_g();
            self.advance(1, 0);
            return true;
        }
        false
    }

    // ==================================================================
    // H
    // ==================================================================

    pub(super) fn encode_h(&mut self) {
        if self.encode_initial_silent_h()
            || self.encode_initial_hs()
            || self.encode_initial_hu_hw()
            || self.encode_non_initial_silent_h()
        {
            return;
        }
        self.encode_h_pronounced();
    }

    /// 'hour', 'herb', 'heir', 'honor', 'honest'
    fn encode_initial_silent_h(&mut self) -> bool {
        let c = self.current;
        if !self.string_at(c + 1, &["OUR", "ERB", "EIR", "ONOR", "ONOUR", "ONEST"]) {
            return false;
        }
        if c == 0 && self.string_start(&["HERB"]) {
            // 'herb' is said both ways
            if self.options.encode_vowels {
                self.keys.add_alt("HA", "A");
            } else {
                self.keys.add_alt("H", "A");
            }
        } else if c == 0 || self.options.encode_vowels {
            self.keys.add("A");
        }
        self.current = self.skip_vowels(c + 1);
        true
    }

    /// Old Chinese transliteration 'hsiao'
    fn encode_initial_hs(&mut self) -> bool {
        if self.current == 0 && self.string_at(0, &["HS"]) {
            self.keys.add("X");
            self.current += 1;
            return true;
        }
        false
    }

    /// Spanish spellings and pinyin: 'huerta', 'hwang'
    fn encode_initial_hu_hw(&mut self) -> bool {
        let c = self.current;
        if !(self.string_start(&["HUA", "HUE", "HWA"]) && !self.string_at(c, &["HUEY"])) {
            return false;
        }
        self.keys.add("A");
        if !self.options.encode_vowels {
            self.current += 2;
        } else {
            // the vowels were just encoded
            self.current += 1;
            while self.current < self.length()
                && (self.is_vowel(self.current) || self.char_at(self.current) == 'W')
            {
                self.current += 1;
            }
            self.current -= 1;
        }
        true
    }

    /// 'nihilist', 'cohen', 'graham'
    fn encode_non_initial_silent_h(&mut self) -> bool {
        let c = self.current;
        if self.string_at(
            c - 2,
            &["NIHIL", "VEHEM", "LOHEN", "NEHEM", "MAHON", "MAHAN", "COHEN", "GAHAN"],
        ) || self.string_at(c - 3, &["TOUHY", "GRAHAM", "PROHIB", "FRAHER", "TOOHEY", "TOUHEY"])
            || self.string_start(&["CHIHUAHUA"])
        {
            if self.options.encode_vowels {
                self.current += 1;
            } else {
                self.current = self.skip_vowels(c + 1);
            }
            return true;
        }
        false
    }

    /// 'H' is only heard before a vowel.
    fn encode_h_pronounced(&mut self) {
        let c = self.current;
        if ((c == 0 || self.is_vowel(c - 1) || (c > 0 && self.char_at(c - 1) == 'W'))
            && self.is_vowel(c + 1))
            || (self.char_at(c + 1) == 'H' && self.is_vowel(c + 2))
        {
            self.keys.add("H");
            self.advance(1, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Metaphone3;

    fn encode(word: &str) -> (String, String) {
        Metaphone3::new().encode(word)
    }

    #[test]
    fn test_final_g_devoiced_unless_exact() {
        assert!(encode("Aaberg").0.ends_with('K'));
        assert!(Metaphone3::new()
            .with_encode_exact(true)
            .encode("Aaberg")
            .0
            .ends_with('G'));
    }

    #[test]
    fn test_double_f_collapses() {
        let mut encoder = Metaphone3::new();
        assert_eq!(encoder.encode("off"), encoder.encode("of"));
    }

    #[test]
    fn test_soft_g_keeps_hard_alternate() {
        assert_eq!(encode("George"), ("JRJ".to_string(), "KRJ".to_string()));
        assert_eq!(encode("danger"), ("TNJR".to_string(), "TNKR".to_string()));
        let mut exact = Metaphone3::new().with_encode_exact(true);
        assert_eq!(exact.encode("gem"), ("JM".to_string(), "GM".to_string()));
    }

    #[test]
    fn test_hard_g_keeps_soft_alternate() {
        assert_eq!(encode("geese"), ("KS".to_string(), "JS".to_string()));
        assert_eq!(encode("Berger"), ("PRKR".to_string(), "PRJR".to_string()));
        let mut exact = Metaphone3::new().with_encode_exact(true);
        assert_eq!(exact.encode("Berger"), ("BRGR".to_string(), "BRJR".to_string()));
    }

    #[test]
    fn test_germanic_hard_g_has_no_soft_alternate() {
        let (primary, secondary) = encode("Schwager");
        assert_eq!(primary, "XKR");
        assert_eq!(secondary, "XFKR");
    }

    #[test]
    fn test_silent_and_f_gh() {
        assert_eq!(encode("night").0, "NT");
        assert_eq!(encode("laugh").0, "LF");
    }

    #[test]
    fn test_h_before_vowel_only() {
        assert_eq!(encode("ahead").0, "AHT");
        assert_eq!(encode("ah").0, "A");
        let mut vowels = Metaphone3::new().with_encode_vowels(true);
        assert_eq!(vowels.encode("anyhow").0, "ANAHA");
    }
}
