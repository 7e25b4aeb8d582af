// The Turkish morphotactic graph: the morpheme inventory, the state
// machine over suffixes, and the stem transition index built from the
// lexicon.

use std::sync::Arc;

use hashbrown::HashMap;

use sarmal_core::{PrimaryPos, TurkishAlphabet};

use crate::analysis::phonetics::phonetic_attributes;
use crate::lexicon::{DictionaryItem, RootLexicon};

use super::conditions::Condition;
use super::morpheme::Morpheme;
use super::state::{MorphemeState, StateId};
use super::stem_modifiers;
use super::transition::{StemTransition, SuffixTransition, TransitionId};

/// The static analysis graph. Built once from a lexicon; read-only
/// afterwards apart from the per-transition surface caches.
pub struct TurkishMorphotactics {
    lexicon: RootLexicon,
    morphemes: HashMap<&'static str, Arc<Morpheme>>,
    states: Vec<MorphemeState>,
    transitions: Vec<SuffixTransition>,
    stems: Vec<StemTransition>,
    stem_index: HashMap<String, Vec<u32>>,
    folded_stem_index: HashMap<String, Vec<u32>>,
    noun_s: StateId,
    adjective_root_st: StateId,
    verb_root_s: StateId,
    punc_root_st: StateId,
}

struct GraphBuilder {
    morphemes: HashMap<&'static str, Arc<Morpheme>>,
    states: Vec<MorphemeState>,
    transitions: Vec<SuffixTransition>,
}

impl GraphBuilder {
    fn new() -> Self {
        Self {
            morphemes: HashMap::new(),
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    fn register(&mut self, morpheme: Arc<Morpheme>) -> Arc<Morpheme> {
        self.morphemes.insert(morpheme.id, morpheme.clone());
        morpheme
    }

    fn state(
        &mut self,
        id: &'static str,
        morpheme: &Arc<Morpheme>,
        terminal: bool,
        derivative: bool,
        pos_root: bool,
    ) -> StateId {
        let state_id = StateId(self.states.len() as u16);
        self.states.push(MorphemeState::new(
            id,
            morpheme.clone(),
            terminal,
            derivative,
            pos_root,
        ));
        state_id
    }

    fn suffix(&mut self, from: StateId, to: StateId, template: &str) {
        self.suffix_if(from, to, template, None);
    }

    fn empty(&mut self, from: StateId, to: StateId) {
        self.suffix_if(from, to, "", None);
    }

    fn suffix_if(
        &mut self,
        from: StateId,
        to: StateId,
        template: &str,
        condition: Option<Condition>,
    ) {
        let id = TransitionId(self.transitions.len() as u32);
        self.transitions
            .push(SuffixTransition::new(from, to, template, condition));
        self.states[from.0 as usize].outgoing.push(id);
        self.states[to.0 as usize].incoming.push(id);
    }
}

impl TurkishMorphotactics {
    pub fn new(lexicon: RootLexicon) -> Self {
        let mut b = GraphBuilder::new();

        // -- Morpheme inventory ---------------------------------------------

        let noun = b.register(Morpheme::with_pos("Noun", "Noun", PrimaryPos::Noun));
        let adj = b.register(Morpheme::with_pos("Adjective", "Adj", PrimaryPos::Adjective));
        let verb = b.register(Morpheme::with_pos("Verb", "Verb", PrimaryPos::Verb));
        let punc = b.register(Morpheme::with_pos("Punctuation", "Punc", PrimaryPos::Punctuation));

        let a1sg = b.register(Morpheme::new("FirstPersonSingular", "A1sg"));
        let a2sg = b.register(Morpheme::new("SecondPersonSingular", "A2sg"));
        let a3sg = b.register(Morpheme::new("ThirdPersonSingular", "A3sg"));
        let a1pl = b.register(Morpheme::new("FirstPersonPlural", "A1pl"));
        let a2pl = b.register(Morpheme::new("SecondPersonPlural", "A2pl"));
        let a3pl = b.register(Morpheme::new("ThirdPersonPlural", "A3pl"));

        let pnon = b.register(Morpheme::new("NoPossession", "Pnon"));
        let p1sg = b.register(Morpheme::new("FirstPersonSingularPossessive", "P1sg"));
        let p2sg = b.register(Morpheme::new("SecondPersonSingularPossessive", "P2sg"));
        let p3sg = b.register(Morpheme::new("ThirdPersonSingularPossessive", "P3sg"));
        let p1pl = b.register(Morpheme::new("FirstPersonPluralPossessive", "P1pl"));
        let p2pl = b.register(Morpheme::new("SecondPersonPluralPossessive", "P2pl"));
        let p3pl = b.register(Morpheme::new("ThirdPersonPluralPossessive", "P3pl"));

        let nom = b.register(Morpheme::new("Nominal", "Nom"));
        let dat = b.register(Morpheme::new("Dative", "Dat"));
        let acc = b.register(Morpheme::new("Accusative", "Acc"));
        let abl = b.register(Morpheme::new("Ablative", "Abl"));
        let loc = b.register(Morpheme::new("Locative", "Loc"));
        let ins = b.register(Morpheme::new("Instrumental", "Ins"));
        let genitive = b.register(Morpheme::new("Genitive", "Gen"));
        let equ = b.register(Morpheme::new("Equ", "Equ"));

        let rel = b.register(Morpheme::derivational("Relation", "Rel"));
        let dim = b.register(Morpheme::derivational("Diminutive", "Dim"));
        let without = b.register(Morpheme::derivational("Without", "Without"));
        let ness = b.register(Morpheme::derivational("Ness", "Ness"));
        let acquire = b.register(Morpheme::derivational("Acquire", "Acquire"));

        let pass = b.register(Morpheme::derivational("Passive", "Pass"));
        let caus = b.register(Morpheme::derivational("Causative", "Caus"));
        let pres_part = b.register(Morpheme::derivational("PresentParticiple", "PresPart"));
        let past_part = b.register(Morpheme::derivational("PastParticiple", "PastPart"));
        let fut_part = b.register(Morpheme::derivational("FutureParticiple", "FutPart"));
        let inf2 = b.register(Morpheme::derivational("Infinitive2", "Inf2"));
        let by_doing_so = b.register(Morpheme::derivational("ByDoingSo", "ByDoingSo"));
        let after_doing_so = b.register(Morpheme::derivational("AfterDoingSo", "AfterDoingSo"));
        let agt = b.register(Morpheme::derivational("Agentive", "Agt"));

        let neg = b.register(Morpheme::new("Negative", "Neg"));
        let past = b.register(Morpheme::new("PastTense", "Past"));
        let fut = b.register(Morpheme::new("Future", "Fut"));
        let prog1 = b.register(Morpheme::new("Progressive1", "Prog1"));

        b.register(Morpheme::unknown());

        // -- States ---------------------------------------------------------

        let punc_root_st = b.state("puncRoot_ST", &punc, true, false, true);

        let noun_s = b.state("noun_S", &noun, false, false, true);
        let a3sg_s = b.state("a3sg_S", &a3sg, false, false, false);
        let a3pl_s = b.state("a3pl_S", &a3pl, false, false, false);

        let pnon_s = b.state("pnon_S", &pnon, false, false, false);
        let p1sg_s = b.state("p1sg_S", &p1sg, false, false, false);
        let p2sg_s = b.state("p2sg_S", &p2sg, false, false, false);
        let p3sg_s = b.state("p3sg_S", &p3sg, false, false, false);
        let p1pl_s = b.state("p1pl_S", &p1pl, false, false, false);
        let p2pl_s = b.state("p2pl_S", &p2pl, false, false, false);
        let p3pl_s = b.state("p3pl_S", &p3pl, false, false, false);

        let nom_st = b.state("nom_ST", &nom, true, false, false);
        let dat_st = b.state("dat_ST", &dat, true, false, false);
        let acc_st = b.state("acc_ST", &acc, true, false, false);
        let abl_st = b.state("abl_ST", &abl, true, false, false);
        let loc_st = b.state("loc_ST", &loc, true, false, false);
        let ins_st = b.state("ins_ST", &ins, true, false, false);
        let gen_st = b.state("gen_ST", &genitive, true, false, false);
        let equ_st = b.state("equ_ST", &equ, true, false, false);

        let rel_s = b.state("rel_S", &rel, false, true, false);
        let dim_s = b.state("dim_S", &dim, false, true, false);
        let without_s = b.state("without_S", &without, false, true, false);
        let ness_s = b.state("ness_S", &ness, false, true, false);
        let acquire_s = b.state("acquire_S", &acquire, false, true, false);

        let adjective_root_st = b.state("adjectiveRoot_ST", &adj, true, false, true);
        let verb_root_s = b.state("verbRoot_S", &verb, false, false, true);

        let v_pass_s = b.state("vPass_S", &pass, false, true, false);
        let v_caus_s = b.state("vCaus_S", &caus, false, true, false);
        let v_pres_part_s = b.state("vPresPart_S", &pres_part, false, true, false);
        let v_past_part_s = b.state("vPastPart_S", &past_part, false, true, false);
        let v_fut_part_s = b.state("vFutPart_S", &fut_part, false, true, false);
        let v_inf2_s = b.state("vInf2_S", &inf2, false, true, false);
        let v_by_doing_so_s = b.state("vByDoingSo_S", &by_doing_so, false, true, false);
        let v_after_doing_s = b.state("vAfterDoing_S", &after_doing_so, false, true, false);
        let v_agt_s = b.state("vAgt_S", &agt, false, true, false);
        let v_neg_s = b.state("vNeg_S", &neg, false, false, false);

        let v_past_s = b.state("vPast_S", &past, false, false, false);
        let v_fut_s = b.state("vFut_S", &fut, false, false, false);
        let v_prog1_s = b.state("vProg1_S", &prog1, false, false, false);

        let v_a1sg_st = b.state("vA1sg_ST", &a1sg, true, false, false);
        let v_a2sg_st = b.state("vA2sg_ST", &a2sg, true, false, false);
        let v_a3sg_st = b.state("vA3sg_ST", &a3sg, true, false, false);
        let v_a1pl_st = b.state("vA1pl_ST", &a1pl, true, false, false);
        let v_a2pl_st = b.state("vA2pl_ST", &a2pl, true, false, false);
        let v_a3pl_st = b.state("vA3pl_ST", &a3pl, true, false, false);

        // -- Nominal inflection ---------------------------------------------

        b.empty(noun_s, a3sg_s);
        b.suffix(noun_s, a3pl_s, "lAr");

        b.empty(a3sg_s, pnon_s);
        b.suffix(a3sg_s, p1sg_s, "Im");
        b.suffix(a3sg_s, p2sg_s, "In");
        b.suffix(a3sg_s, p3sg_s, "sI");
        b.suffix(a3sg_s, p1pl_s, "ImIz");
        b.suffix(a3sg_s, p2pl_s, "InIz");
        b.suffix(a3sg_s, p3pl_s, "lArI");

        b.empty(a3pl_s, pnon_s);
        b.suffix(a3pl_s, p1sg_s, "Im");
        b.suffix(a3pl_s, p2sg_s, "In");
        b.suffix(a3pl_s, p3sg_s, "I");
        b.suffix(a3pl_s, p1pl_s, "ImIz");
        b.suffix(a3pl_s, p2pl_s, "InIz");
        b.suffix(a3pl_s, p3pl_s, "I");

        // Third person possessives take an `n` buffer before cases.
        for p3 in [p3sg_s, p3pl_s] {
            b.empty(p3, nom_st);
            b.suffix(p3, dat_st, "nA");
            b.suffix(p3, acc_st, "nI");
            b.suffix(p3, abl_st, "ndAn");
            b.suffix(p3, loc_st, "ndA");
            b.suffix(p3, ins_st, "ylA");
            b.suffix(p3, gen_st, "nIn");
            b.suffix(p3, equ_st, "ncA");
        }

        for poss in [pnon_s, p1sg_s, p2sg_s, p1pl_s, p2pl_s] {
            b.empty(poss, nom_st);
            b.suffix(poss, dat_st, "+yA");
            b.suffix(poss, acc_st, "+yI");
            b.suffix(poss, abl_st, ">dAn");
            b.suffix(poss, loc_st, ">dA");
            b.suffix(poss, ins_st, "+ylA");
            b.suffix(poss, gen_st, "+nIn");
            b.suffix(poss, equ_st, ">cA");
        }

        // -- Noun derivations -----------------------------------------------

        b.suffix(loc_st, rel_s, "ki");
        b.empty(rel_s, adjective_root_st);

        // Diminutive only attaches to a bare stem.
        b.suffix_if(nom_st, dim_s, ">cI~k", Some(Condition::has_no_surface()));
        b.suffix_if(nom_st, dim_s, ">cI!ğ", Some(Condition::has_no_surface()));
        b.empty(dim_s, noun_s);

        for source in [nom_st, adjective_root_st] {
            b.suffix(source, without_s, "sIz");
            b.suffix(source, ness_s, "lI~k");
            b.suffix(source, ness_s, "lI!ğ");
            b.suffix(source, acquire_s, "lAn");
        }
        b.empty(without_s, adjective_root_st);
        b.empty(ness_s, noun_s);
        b.empty(acquire_s, verb_root_s);

        // -- Verbal derivations ---------------------------------------------

        b.suffix(verb_root_s, v_neg_s, "mA");
        b.suffix(verb_root_s, v_pass_s, "+nIl");
        b.empty(v_pass_s, verb_root_s);
        b.suffix(verb_root_s, v_caus_s, ">dIr");
        b.empty(v_caus_s, verb_root_s);

        b.suffix(verb_root_s, v_inf2_s, "mA");
        b.empty(v_inf2_s, noun_s);

        b.suffix(verb_root_s, v_by_doing_so_s, "+yArAk");
        b.empty(v_by_doing_so_s, adjective_root_st);
        b.suffix(verb_root_s, v_after_doing_s, "+yIp");
        b.empty(v_after_doing_s, adjective_root_st);
        b.suffix(verb_root_s, v_agt_s, "+yIcI");
        b.empty(v_agt_s, adjective_root_st);

        b.suffix(verb_root_s, v_pres_part_s, "+yAn");
        b.empty(v_pres_part_s, adjective_root_st);
        b.empty(v_pres_part_s, noun_s);

        b.suffix(verb_root_s, v_past_part_s, ">dI~k");
        b.suffix(verb_root_s, v_past_part_s, ">dI!ğ");
        b.empty(v_past_part_s, adjective_root_st);
        b.empty(v_past_part_s, noun_s);

        b.suffix(verb_root_s, v_fut_part_s, "+yAcA~k");
        b.suffix(verb_root_s, v_fut_part_s, "+yAcA!ğ");
        b.empty(v_fut_part_s, adjective_root_st);
        b.empty(v_fut_part_s, noun_s);

        // Negative stems take the same tense and participle suffixes.
        b.suffix(v_neg_s, v_past_s, "dI");
        b.suffix(v_neg_s, v_fut_s, "+yAcA~k");
        b.suffix(v_neg_s, v_fut_s, "+yAcA!ğ");
        b.suffix(v_neg_s, v_pres_part_s, "+yAn");
        b.suffix(v_neg_s, v_past_part_s, "dI~k");
        b.suffix(v_neg_s, v_past_part_s, "dI!ğ");
        b.suffix(v_neg_s, v_inf2_s, "mA");

        // -- Tenses and agreement -------------------------------------------

        b.suffix(verb_root_s, v_past_s, ">dI");
        b.suffix(verb_root_s, v_fut_s, "+yAcA~k");
        b.suffix(verb_root_s, v_fut_s, "+yAcA!ğ");
        b.suffix(verb_root_s, v_prog1_s, "Iyor");

        b.suffix(v_past_s, v_a1sg_st, "Im");
        b.suffix(v_past_s, v_a2sg_st, "In");
        b.empty(v_past_s, v_a3sg_st);
        b.suffix(v_past_s, v_a1pl_st, "k");
        b.suffix(v_past_s, v_a2pl_st, "InIz");
        b.suffix(v_past_s, v_a3pl_st, "lAr");

        b.suffix(v_prog1_s, v_a1sg_st, "Im");
        b.suffix(v_prog1_s, v_a2sg_st, "sIn");
        b.empty(v_prog1_s, v_a3sg_st);
        b.suffix(v_prog1_s, v_a1pl_st, "Iz");
        b.suffix(v_prog1_s, v_a2pl_st, "sInIz");
        b.suffix(v_prog1_s, v_a3pl_st, "lAr");

        b.suffix(v_fut_s, v_a1sg_st, "+yIm");
        b.suffix(v_fut_s, v_a2sg_st, "sIn");
        b.empty(v_fut_s, v_a3sg_st);
        b.suffix(v_fut_s, v_a1pl_st, "+yIz");
        b.suffix(v_fut_s, v_a2pl_st, "sInIz");
        b.suffix(v_fut_s, v_a3pl_st, "lAr");

        // -- Stem transitions -----------------------------------------------

        let mut graph = Self {
            lexicon,
            morphemes: b.morphemes,
            states: b.states,
            transitions: b.transitions,
            stems: Vec::new(),
            stem_index: HashMap::new(),
            folded_stem_index: HashMap::new(),
            noun_s,
            adjective_root_st,
            verb_root_s,
            punc_root_st,
        };

        let items: Vec<Arc<DictionaryItem>> = graph.lexicon.iter().cloned().collect();
        for item in &items {
            graph.add_dictionary_item(item);
        }

        graph
    }

    fn add_dictionary_item(&mut self, item: &Arc<DictionaryItem>) {
        let root_state = self.root_state_for(item);
        if stem_modifiers::has_modifier_attribute(item) {
            for stem in stem_modifiers::generate(item, root_state) {
                self.add_stem_transition(stem);
            }
        } else {
            let attrs = phonetic_attributes(&item.root);
            self.add_stem_transition(StemTransition::new(
                item.root.clone(),
                item.clone(),
                attrs,
                root_state,
            ));
        }
    }

    fn add_stem_transition(&mut self, stem: StemTransition) {
        let id = self.stems.len() as u32;
        let folded = TurkishAlphabet::instance().to_ascii(&stem.surface);
        self.stem_index
            .entry(stem.surface.clone())
            .or_default()
            .push(id);
        self.folded_stem_index.entry(folded).or_default().push(id);
        self.stems.push(stem);
    }

    /// Entry state of the graph for a dictionary item's part of speech.
    pub fn root_state_for(&self, item: &DictionaryItem) -> StateId {
        match item.primary_pos {
            PrimaryPos::Adjective => self.adjective_root_st,
            PrimaryPos::Verb => self.verb_root_s,
            PrimaryPos::Punctuation => self.punc_root_st,
            _ => self.noun_s,
        }
    }

    // -- Lookups ------------------------------------------------------------

    pub fn state(&self, id: StateId) -> &MorphemeState {
        &self.states[id.0 as usize]
    }

    pub fn transition(&self, id: TransitionId) -> &SuffixTransition {
        &self.transitions[id.0 as usize]
    }

    pub fn morpheme(&self, id: &str) -> Option<&Arc<Morpheme>> {
        self.morphemes.get(id)
    }

    pub fn lexicon(&self) -> &RootLexicon {
        &self.lexicon
    }

    /// Stem transitions whose surface exactly matches `surface`.
    pub fn stem_transitions_for(&self, surface: &str) -> Vec<&StemTransition> {
        self.stem_index
            .get(surface)
            .map(|ids| ids.iter().map(|&i| &self.stems[i as usize]).collect())
            .unwrap_or_default()
    }

    /// All stem transitions whose surface is a prefix of `input`, longest
    /// prefix first, ties in lexicon insertion order. In ASCII-tolerant
    /// mode lookup keys are diacritics-folded.
    pub fn prefix_matches(&self, input: &str, ascii_tolerant: bool) -> Vec<&StemTransition> {
        let (key, map) = if ascii_tolerant {
            (
                TurkishAlphabet::instance().to_ascii(input),
                &self.folded_stem_index,
            )
        } else {
            (input.to_string(), &self.stem_index)
        };

        // Byte offsets where each rune prefix ends.
        let mut ends: Vec<usize> = key.char_indices().skip(1).map(|(i, _)| i).collect();
        ends.push(key.len());

        let mut result = Vec::new();
        for &end in ends.iter().rev() {
            if let Some(ids) = map.get(&key[..end]) {
                result.extend(ids.iter().map(|&i| &self.stems[i as usize]));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(lines: &[&str]) -> TurkishMorphotactics {
        TurkishMorphotactics::new(RootLexicon::from_lines(lines.iter().copied()))
    }

    #[test]
    fn states_are_wired() {
        let g = graph(&["kitap"]);
        let noun_s = g.root_state_for(&DictionaryItem::parse("ev", 0).unwrap());
        let state = g.state(noun_s);
        assert_eq!(state.id, "noun_S");
        // noun_S -> a3sg_S (empty) and a3pl_S (`lAr`).
        assert_eq!(state.outgoing.len(), 2);
        let plural = g.transition(state.outgoing[1]);
        assert_eq!(plural.template, "lAr");
        assert!(g.state(plural.to).id.starts_with("a3pl"));
    }

    #[test]
    fn root_state_follows_pos() {
        let g = graph(&[]);
        let verb = DictionaryItem::parse("gitmek [P:Verb]", 0).unwrap();
        assert_eq!(g.state(g.root_state_for(&verb)).id, "verbRoot_S");
        let adj = DictionaryItem::parse("güzel [P:Adj]", 0).unwrap();
        assert_eq!(g.state(g.root_state_for(&adj)).id, "adjectiveRoot_ST");
        let adv = DictionaryItem::parse("dün [P:Adv]", 0).unwrap();
        assert_eq!(g.state(g.root_state_for(&adv)).id, "noun_S");
    }

    #[test]
    fn modified_stems_are_indexed() {
        let g = graph(&["kitap [A:Voicing]"]);
        assert_eq!(g.stem_transitions_for("kitap").len(), 1);
        assert_eq!(g.stem_transitions_for("kitab").len(), 1);
    }

    #[test]
    fn prefix_matches_longest_first() {
        let g = graph(&["el", "elma"]);
        let matches = g.prefix_matches("elmalar", false);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].surface, "elma");
        assert_eq!(matches[1].surface, "el");
    }

    #[test]
    fn prefix_matches_ties_in_insertion_order() {
        let g = graph(&["yüz", "yüz [P:Verb]"]);
        let matches = g.prefix_matches("yüz", false);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].item.id, "yüz_Noun");
        assert_eq!(matches[1].item.id, "yüz_Verb");
    }

    #[test]
    fn ascii_tolerant_prefix_matches() {
        let g = graph(&["kişi"]);
        assert!(g.prefix_matches("kisiler", false).is_empty());
        let matches = g.prefix_matches("kisiler", true);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].surface, "kişi");
    }

    #[test]
    fn every_state_is_reachable() {
        let g = graph(&[]);
        for state in &g.states {
            assert!(
                state.pos_root || !state.incoming.is_empty(),
                "state {} has no incoming edge",
                state.id
            );
        }
    }

    #[test]
    fn morpheme_inventory_lookup() {
        let g = graph(&[]);
        assert!(g.morpheme("A3pl").is_some());
        assert!(g.morpheme("Dim").is_some_and(|m| m.derivational));
        assert!(g.morpheme("Bogus").is_none());
    }
}
