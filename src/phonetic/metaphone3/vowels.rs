//! Vowel rules, including when a written 'E' is pronounced.
//!
//! An initial vowel is always encoded as 'A'. Other vowels are only encoded
//! when vowel encoding is enabled, and a run of vowels collapses into one 'A'.

use super::Metaphone3;

/// Final '-ES' names and words where the 'E' is heard.
const PRONOUNCED_ES_ENDINGS: &[&str] = &[
    "INES", "LOPES", "ESTES", "GOMES", "NUNES", "ALVES", "ICKES", "INNES", "PERES", "WAGES", "NEVES",
    "BENES", "DONES", "CORTES", "CHAVES", "VALDES", "ROBLES", "TORRES", "FLORES", "BORGES",
    "NIEVES", "MONTES", "SOARES", "VALLES", "GEDDES", "ANDRES", "VIAJES", "CALLES", "FONTES",
    "HERMES", "ACEVES", "BATRES", "MATHES", "DELORES", "MORALES", "DOLORES", "ANGELES", "ROSALES",
    "MIRELES", "LINARES", "PERALES", "PAREDES", "BRIONES", "SANCHES", "CAZARES", "REVELES",
    "ESTEVES", "ALVARES", "MATTHES", "SOLARES", "CASARES", "CACERES", "STURGES", "RAMIRES",
    "FUNCHES", "BENITES", "FUENTES", "PUENTES", "TABARES", "HENTGES", "VALORES", "GONZALES",
    "MERCEDES", "FAGUNDES", "JOHANNES", "GONSALES", "BERMUDES", "CESPEDES", "BETANCES", "TERRONES",
    "DIOGENES", "CORRALES", "CABRALES", "MARTINES", "GRAJALES", "CERVANTES", "FERNANDES",
    "GONCALVES", "BENEVIDES", "CIFUENTES", "SIFUENTES", "SERVANTES", "HERNANDES", "BENAVIDES",
    "ARCHIMEDES", "CARRIZALES", "MAGALLANES",
];

/// Words and names whose final 'E' is heard.
const PRONOUNCED_FINAL_E: &[&str] = &[
    "ACME", "NIKE", "CAFE", "RENE", "LUPE", "JOSE", "ESME", "LETHE", "CADRE", "TILDE", "SIGNE",
    "POSSE", "LATTE", "ANIME", "DOLCE", "CROCE", "ADOBE", "OUTRE", "JESSE", "JAIME", "JAFFE",
    "BENGE", "RUNGE", "CHILE", "DESME", "CONDE", "URIBE", "LIBRE", "ANDRE", "HECATE", "PSYCHE",
    "DAPHNE", "PENSKE", "CLICHE", "RECIPE", "TAMALE", "SESAME", "SIMILE", "FINALE", "KARATE",
    "RENATE", "SHANTE", "OBERLE", "COYOTE", "KRESGE", "STONGE", "STANGE", "SWAYZE", "FUENTE",
    "SALOME", "URRIBE", "ECHIDNE", "ARIADNE", "MEINEKE", "PORSCHE", "ANEMONE", "EPITOME", "SYNCOPE",
    "SOUFFLE", "ATTACHE", "MACHETE", "KARAOKE", "BUKKAKE", "VICENTE", "ELLERBE", "VERSACE",
    "PENELOPE", "CALLIOPE", "CHIPOTLE", "ANTIGONE", "KAMIKAZE", "EURIDICE", "YOSEMITE", "FERRANTE",
    "HYPERBOLE", "GUACAMOLE", "XANTHIPPE", "SYNECDOCHE",
];

impl Metaphone3 {
    pub(super) fn encode_vowel(&mut self) {
        let c = self.current;
        if c == 0 {
            // every initial vowel maps to 'A'
            self.keys.add("A");
        } else if self.options.encode_vowels {
            if self.char_at(c) != 'E' {
                if self.encode_skip_silent_ue() || self.encode_o_silent() {
                    return;
                }
                self.keys.add("A");
            } else {
                self.encode_e_pronounced();
            }
        }

        let c = self.current;
        // the 'W' of Polish '-lewa', '-lewo' is a consonant
        if !(!self.is_vowel(c - 2) && self.string_at(c - 1, &["LEWA", "LEWO", "LEWI"])) {
            self.current = self.skip_vowels(c + 1);
        }
    }

    /// Silent 'UE' after 'Q' or 'G': 'unique', 'league', 'jacques'
    fn encode_skip_silent_ue(&mut self) -> bool {
        let c = self.current;
        if (self.string_at(c - 1, &["QUE", "GUE"])
            && !self.string_start(&[
                "RISQUE", "PIROGUE", "ENRIQUE", "BARBEQUE", "PALENQUE", "APPLIQUE", "COMMUNIQUE",
            ])
            && !self.string_at(c - 3, &["ARGUE", "SEGUE"]))
            && c > 1
            && (c + 1 == self.last || self.string_start(&["JACQUES"]))
        {
            self.current = self.skip_vowels(c);
            return true;
        }
        false
    }

    /// Decides whether a non-initial 'E' is heard.
    fn encode_e_pronounced(&mut self) {
        let c = self.current;
        // two pronunciations: 'lame', 'agape', 'resume'
        if self.string_exact(&["LAME", "SAKE", "PATE", "AGAPE"])
            || (self.string_start(&["RESUME"]) && c == 5)
        {
            self.keys.add_alt("", "A");
            return;
        }
        // 'inge'
        if self.string_exact(&["INGE"]) {
            self.keys.add_alt("A", "");
            return;
        }
        // '-ed' as its own syllable
        if c == 5 && self.string_start(&["BLESSED", "LEARNED"]) {
            self.keys.add_exact_alt("D", "AD", "T", "AT");
            self.current += 1;
            return;
        }
        if (!self.e_silent() && !self.al_inversion && !self.silent_internal_e())
            || self.e_pronounced_exceptions()
        {
            self.keys.add("A");
        }
        self.al_inversion = false;
    }

    /// The 'O' of '-iron' ('iron', 'environ'), but not 'ironic'
    fn encode_o_silent(&mut self) -> bool {
        let c = self.current;
        self.char_at(c) == 'O'
            && self.string_at(c - 2, &["IRON"])
            && (self.string_start(&["IRON"]) || self.string_at_end(c - 2, &["IRON"]))
            && !self.string_at(c - 2, &["IRONIC"])
    }

    /// Final 'E', '-ES', '-ED', '-NESS', '-LESS' and '-LY' are silent.
    fn e_silent(&self) -> bool {
        let c = self.current;
        if self.e_pronounced_at_end() {
            return false;
        }
        c == self.last
            || (c > 1
                && c + 1 == self.last
                && self.string_at(c + 1, &["S", "D"])
                && !(self.string_at(c - 1, &["TED", "SES", "CES"])
                    || self.string_start(&[
                        "ABED", "IMED", "JARED", "AHMED", "HAMED", "JAVED", "NORRED", "MEDVED",
                        "MERCED", "ALLRED", "KHALED", "RASHED", "MASJED", "MOHAMED", "MOHAMMED",
                        "MUHAMMED", "MOUHAMED", "ANTIPODES", "ANOPHELES",
                    ])))
            || self.string_at_end(c + 1, &["NESS", "LESS"])
            || (self.string_at_end(c + 1, &["LY"]) && !self.string_start(&["CICELY"]))
    }

    /// Final 'E' that is heard: short words, Greek names, '-KE' surnames.
    fn e_pronounced_at_end(&self) -> bool {
        let c = self.current;
        c == self.last
            && (self.string_at(c - 6, &["STROPHE"])
                || self.length() == 2
                || (self.length() == 3 && !self.is_vowel(0))
                || (self.string_at_end(
                    c - 2,
                    &["BKE", "DKE", "FKE", "KKE", "LKE", "NKE", "MKE", "PKE", "TKE", "VKE", "ZKE"],
                ) && !self.string_start(&["FINKE", "FUNKE", "FRANKE"]))
                || self.string_at_end(c - 4, &["SCHKE"])
                || self.string_exact(PRONOUNCED_FINAL_E))
    }

    /// Silent 'E' inside a compound: 'olesen', 'careful', 'whitehouse'
    fn silent_internal_e(&self) -> bool {
        (self.string_start(&["OLE"]) && self.e_suffix(3))
            || (self.string_start(&[
                "BARE", "FIRE", "FORE", "GATE", "HAGE", "HAVE", "HAZE", "HOLE", "CAPE", "HUSE",
                "LACE", "LINE", "LIVE", "LOVE", "MORE", "MOSE", "MORE", "NICE", "RAKE", "ROBE",
                "ROSE", "SISE", "SIZE", "WARE", "WAKE", "WISE", "WINE",
            ]) && self.e_suffix(4))
            || (self.string_start(&[
                "BLAKE", "BRAKE", "BRINE", "CARLE", "CLEVE", "DUNNE", "HEDGE", "HOUSE", "JEFFE",
                "LUNCE", "STOKE", "STONE", "THORE", "WEDGE", "WHITE",
            ]) && self.e_suffix(5))
            || (self.string_start(&["BRIDGE", "CHEESE"]) && self.e_suffix(6))
            || self.string_at(self.current - 5, &["CHARLES"])
    }

    /// True if the root ending in 'E' just before `at` is followed by a
    /// suffix that keeps the 'E' silent.
    fn e_suffix(&self, at: isize) -> bool {
        let len = self.length();
        if self.current == at - 1
            && len > at + 1
            && (self.is_vowel(at + 1) || (self.string_at(at, &["ST", "SL"]) && len > at + 2))
        {
            return !self.string_at_end(
                at,
                &[
                    "T", "R", "TA", "TT", "NA", "NO", "NE", "RS", "RE", "LA", "AU", "RO", "RA", "TTE",
                    "LIA", "NOW", "ROS", "RAS", "WOOD", "WATER", "WORTH",
                ],
            );
        }
        false
    }

    /// '-ES' and '-ED' endings where the 'E' is heard, and 'problem'.
    fn e_pronounced_exceptions(&self) -> bool {
        let c = self.current;
        (c + 1 == self.last
            && (self.string_at_end(c - 3, &["OCLES", "ACLES", "AKLES"])
                || self.string_start(PRONOUNCED_ES_ENDINGS)))
            || self.string_at(c - 2, &["FRED", "DGES", "DRED", "GNES"])
            || self.string_at(c - 5, &["PROBLEM", "RESPLEN"])
            || self.string_at(c - 4, &["REPLEN"])
            || self.string_at(c - 3, &["SPLE"])
    }
}

#[cfg(test)]
mod tests {
    use super::super::Metaphone3;

    fn vowels(word: &str) -> String {
        Metaphone3::new().with_encode_vowels(true).encode(word).0
    }

    #[test]
    fn test_initial_vowel_always_encoded() {
        assert_eq!(Metaphone3::new().encode("eek").0, "AK");
        assert_eq!(vowels("eek"), "AK");
    }

    #[test]
    fn test_final_e_silent() {
        assert_eq!(vowels("supernode"), "SAPARNAT");
    }

    #[test]
    fn test_vowels_off_ignores_internal_vowels() {
        let plain = Metaphone3::new().encode("supernode").0;
        assert!(!plain[1..].contains('A'));
    }
}
