//! The LaTeX command catalog
//!
//! Maps command names (without the escape) to the atom each one produces.
//! Names sharing a template are registered together so that the first name
//! becomes the canonical spelling used when writing an atom back out.

use crate::atom::MathAtom;
use crate::math_list::MathList;
use crate::space::Space;
use crate::style::LineStyle;
use crate::symbols::{divide, placeholder, times};
use math_structures::{AliasDictionary, AliasInsert, DictionaryResult};

/// Accent template with an empty body
fn accent(combining: &str) -> MathAtom {
    MathAtom::accent(combining, MathList::new())
}

/// Operator whose limit placement follows the line style
fn limits(nucleus: &str) -> MathAtom {
    MathAtom::large_operator(nucleus, None, false)
}

/// Operator with limits always set as scripts
fn integral(nucleus: &str) -> MathAtom {
    MathAtom::large_operator(nucleus, Some(false), false)
}

/// Named function such as `\sin`, drawn upright as text
fn function(name: &str) -> MathAtom {
    MathAtom::large_operator(name, Some(false), true)
}

/// Build the full command catalog
pub(crate) fn build_commands() -> DictionaryResult<AliasDictionary<String, MathAtom>> {
    let mut commands: AliasDictionary<String, MathAtom> = AliasDictionary::new();
    let mut add = |names: &[&str], atom: MathAtom| {
        commands.insert_aliases(names.iter().copied(), atom)
    };

    // Integrals, hyperbolic functions and extra accents
    add(&["because"], MathAtom::ordinary("\u{2235}"))?;
    add(&["therefore"], MathAtom::ordinary("\u{2234}"))?;
    add(&["diameter"], MathAtom::ordinary("\u{2300}"))?;
    add(&["degree"], MathAtom::ordinary("°"))?;
    add(&["iiint"], integral("∭"))?;
    add(&["iiiint"], integral("⨌"))?;
    add(&["oiiint"], integral("∰"))?;
    add(&["intclockwise"], integral("∱"))?;
    add(&["awint"], integral("⨑"))?;
    add(&["varointclockwise"], integral("∲"))?;
    add(&["ointctrclockwise"], integral("∳"))?;
    add(&["iint"], integral("∬"))?;
    add(&["oiint"], integral("∯"))?;
    add(&["bigbot"], limits("⟘"))?;
    add(&["bigtop"], limits("⟙"))?;
    add(&["bigcupdot"], limits("⨃"))?;
    add(&["bigsqcap"], limits("⨅"))?;
    add(&["bigtimes"], limits("⨉"))?;
    add(&["arsinh"], function("arsinh"))?;
    add(&["arcosh"], function("arcosh"))?;
    add(&["artanh"], function("artanh"))?;
    add(&["arccot"], function("arccot"))?;
    add(&["arcoth"], function("arcoth"))?;
    add(&["arcsec"], function("arcsec"))?;
    add(&["sech"], function("sech"))?;
    add(&["arsech"], function("arsech"))?;
    add(&["arccsc"], function("arccsc"))?;
    add(&["csch"], function("csch"))?;
    add(&["arcsch"], function("arcsch"))?;
    add(&["overbar"], accent("\u{0305}"))?;
    add(&["ovhook"], accent("\u{0309}"))?;
    add(&["ocirc"], accent("\u{030A}"))?;
    add(&["leftharpoonaccent"], accent("\u{20D0}"))?;
    add(&["rightharpoonaccent"], accent("\u{20D1}"))?;
    add(&["vertoverlay"], accent("\u{20D2}"))?;
    add(&["dddot"], accent("\u{20DB}"))?;
    add(&["ddddot"], accent("\u{20DC}"))?;
    add(&["widebridgeabove"], accent("\u{20E9}"))?;
    add(&["asteraccent"], accent("\u{20F0}"))?;
    add(&["threeunderdot"], accent("\u{20E8}"))?;

    // Delimiters, spacing and styles
    add(&[" "], MathAtom::ordinary(" "))?;
    add(&["lceil"], MathAtom::open("⌈"))?;
    add(&["rceil"], MathAtom::close("⌉"))?;
    add(&["lfloor"], MathAtom::open("⌊"))?;
    add(&["rfloor"], MathAtom::close("⌋"))?;
    add(&["langle"], MathAtom::open("〈"))?;
    add(&["rangle"], MathAtom::close("〉"))?;
    add(&["lgroup"], MathAtom::open("⟮"))?;
    add(&["rgroup"], MathAtom::close("⟯"))?;
    add(&[","], MathAtom::space(Space::SHORT))?;
    add(&[":", ">"], MathAtom::space(Space::MEDIUM))?;
    add(&[";"], MathAtom::space(Space::LONG))?;
    add(&["!"], MathAtom::space(-Space::SHORT))?;
    add(&["enspace"], MathAtom::space(Space::EM_WIDTH / 2.0))?;
    add(&["quad"], MathAtom::space(Space::EM_WIDTH))?;
    add(&["qquad"], MathAtom::space(Space::EM_WIDTH * 2.0))?;
    add(&["displaystyle"], MathAtom::style(LineStyle::Display))?;
    add(&["textstyle"], MathAtom::style(LineStyle::Text))?;
    add(&["scriptstyle"], MathAtom::style(LineStyle::Script))?;
    add(&["scriptscriptstyle"], MathAtom::style(LineStyle::ScriptScript))?;

    // Escaped specials
    add(&["$"], MathAtom::ordinary("$"))?;
    add(&["%"], MathAtom::ordinary("%"))?;
    add(&["_"], MathAtom::ordinary("_"))?;
    add(&["}", "rbrace"], MathAtom::close("}"))?;
    add(&["&"], MathAtom::ordinary("&"))?;
    add(&["#"], MathAtom::ordinary("#"))?;
    add(&["{", "lbrace"], MathAtom::open("{"))?;

    // Text symbols
    add(&["P"], MathAtom::ordinary("¶"))?;
    add(&["S"], MathAtom::ordinary("§"))?;
    add(&["copyright"], MathAtom::ordinary("©"))?;
    add(&["dag"], MathAtom::ordinary("†"))?;
    add(&["ddag"], MathAtom::ordinary("‡"))?;
    add(&["dots"], MathAtom::ordinary("…"))?;
    add(&["pounds"], MathAtom::ordinary("£"))?;

    // Non-ASCII letters
    add(&["aa"], MathAtom::ordinary("å"))?;
    add(&["AA", "angstrom"], MathAtom::ordinary("Å"))?;
    add(&["AE"], MathAtom::ordinary("Æ"))?;
    add(&["ae"], MathAtom::ordinary("æ"))?;
    add(&["DH"], MathAtom::ordinary("Ð"))?;
    add(&["dh"], MathAtom::ordinary("ð"))?;
    add(&["DJ"], MathAtom::ordinary("Đ"))?;
    add(&["L"], MathAtom::ordinary("Ł"))?;
    add(&["l"], MathAtom::ordinary("ł"))?;
    add(&["NG"], MathAtom::ordinary("Ŋ"))?;
    add(&["ng"], MathAtom::ordinary("ŋ"))?;
    add(&["o"], MathAtom::ordinary("ø"))?;
    add(&["O"], MathAtom::ordinary("Ø"))?;
    add(&["OE"], MathAtom::ordinary("Œ"))?;
    add(&["oe"], MathAtom::ordinary("œ"))?;
    add(&["ss"], MathAtom::ordinary("ß"))?;
    add(&["SS"], MathAtom::ordinary("SS"))?;
    add(&["TH"], MathAtom::ordinary("Þ"))?;
    add(&["th"], MathAtom::ordinary("þ"))?;

    // Greek
    add(&["alpha"], MathAtom::variable("α"))?;
    add(&["beta"], MathAtom::variable("β"))?;
    add(&["gamma"], MathAtom::variable("γ"))?;
    add(&["delta"], MathAtom::variable("δ"))?;
    add(&["epsilon"], MathAtom::variable("ϵ"))?;
    add(&["varepsilon"], MathAtom::variable("ε"))?;
    add(&["zeta"], MathAtom::variable("ζ"))?;
    add(&["eta"], MathAtom::variable("η"))?;
    add(&["theta"], MathAtom::variable("θ"))?;
    add(&["vartheta"], MathAtom::variable("ϑ"))?;
    add(&["iota"], MathAtom::variable("ι"))?;
    add(&["kappa"], MathAtom::variable("κ"))?;
    add(&["lambda"], MathAtom::variable("λ"))?;
    add(&["mu"], MathAtom::variable("µ"))?;
    add(&["nu"], MathAtom::variable("ν"))?;
    add(&["xi"], MathAtom::variable("ξ"))?;
    add(&["omicron"], MathAtom::variable("ο"))?;
    add(&["pi"], MathAtom::variable("π"))?;
    add(&["varpi"], MathAtom::variable("ϖ"))?;
    add(&["rho"], MathAtom::variable("ρ"))?;
    add(&["varrho"], MathAtom::variable("ϱ"))?;
    add(&["sigma"], MathAtom::variable("σ"))?;
    add(&["varsigma"], MathAtom::variable("ς"))?;
    add(&["tau"], MathAtom::variable("τ"))?;
    add(&["upsilon"], MathAtom::variable("υ"))?;
    add(&["phi"], MathAtom::variable("φ"))?;
    add(&["varphi"], MathAtom::variable("ϕ"))?;
    add(&["chi"], MathAtom::variable("χ"))?;
    add(&["psi"], MathAtom::variable("ψ"))?;
    add(&["omega"], MathAtom::variable("ω"))?;
    add(&["Gamma"], MathAtom::variable("Γ"))?;
    add(&["Delta"], MathAtom::variable("∆"))?;
    add(&["Theta"], MathAtom::variable("Θ"))?;
    add(&["Lambda"], MathAtom::variable("Λ"))?;
    add(&["Xi"], MathAtom::variable("Ξ"))?;
    add(&["Pi"], MathAtom::variable("Π"))?;
    add(&["Sigma"], MathAtom::variable("Σ"))?;
    add(&["Upsilon"], MathAtom::variable("Υ"))?;
    add(&["Phi"], MathAtom::variable("Φ"))?;
    add(&["Psi"], MathAtom::variable("Ψ"))?;
    add(&["Omega"], MathAtom::variable("Ω"))?;

    // Binary operators
    add(&["pm"], MathAtom::binary_operator("±"))?;
    add(&["mp"], MathAtom::binary_operator("∓"))?;
    add(&["times"], times())?;
    add(&["div"], divide())?;
    add(&["ast"], MathAtom::binary_operator("∗"))?;
    add(&["star"], MathAtom::binary_operator("⋆"))?;
    add(&["circ"], MathAtom::binary_operator("◦"))?;
    add(&["bullet"], MathAtom::binary_operator("•"))?;
    add(&["cdot"], MathAtom::binary_operator("·"))?;
    add(&["cap"], MathAtom::binary_operator("∩"))?;
    add(&["cup"], MathAtom::binary_operator("∪"))?;
    add(&["uplus"], MathAtom::binary_operator("⊎"))?;
    add(&["sqcap"], MathAtom::binary_operator("⊓"))?;
    add(&["sqcup"], MathAtom::binary_operator("⊔"))?;
    add(&["vee", "lor"], MathAtom::binary_operator("∨"))?;
    add(&["wedge", "land"], MathAtom::binary_operator("∧"))?;
    add(&["setminus"], MathAtom::binary_operator("∖"))?;
    add(&["wr"], MathAtom::binary_operator("≀"))?;
    add(&["diamond"], MathAtom::binary_operator("⋄"))?;
    add(&["bigtriangleup"], MathAtom::binary_operator("△"))?;
    add(&["bigtriangledown"], MathAtom::binary_operator("▽"))?;
    add(&["triangleleft"], MathAtom::binary_operator("◁"))?;
    add(&["triangleright"], MathAtom::binary_operator("▷"))?;
    add(&["lhd"], MathAtom::binary_operator("⊲"))?;
    add(&["rhd"], MathAtom::binary_operator("⊳"))?;
    add(&["unlhd"], MathAtom::binary_operator("⊴"))?;
    add(&["unrhd"], MathAtom::binary_operator("⊵"))?;
    add(&["oplus"], MathAtom::binary_operator("⊕"))?;
    add(&["ominus"], MathAtom::binary_operator("⊖"))?;
    add(&["otimes"], MathAtom::binary_operator("⊗"))?;
    add(&["oslash"], MathAtom::binary_operator("⊘"))?;
    add(&["odot"], MathAtom::binary_operator("⊙"))?;
    add(&["bigcirc"], MathAtom::binary_operator("◯"))?;
    add(&["dagger"], MathAtom::binary_operator("†"))?;
    add(&["ddagger"], MathAtom::binary_operator("‡"))?;
    add(&["amalg"], MathAtom::binary_operator("⨿"))?;

    // Relations
    add(&["leq", "le"], MathAtom::relation("≤"))?;
    add(&["geq", "ge"], MathAtom::relation("≥"))?;
    add(&["equiv"], MathAtom::relation("≡"))?;
    add(&["models"], MathAtom::relation("⊧"))?;
    add(&["prec"], MathAtom::relation("≺"))?;
    add(&["succ"], MathAtom::relation("≻"))?;
    add(&["sim"], MathAtom::relation("∼"))?;
    add(&["perp"], MathAtom::relation("⟂"))?;
    add(&["preceq"], MathAtom::relation("⪯"))?;
    add(&["succeq"], MathAtom::relation("⪰"))?;
    add(&["simeq"], MathAtom::relation("≃"))?;
    add(&["mid"], MathAtom::relation("∣"))?;
    add(&["ll"], MathAtom::relation("≪"))?;
    add(&["gg"], MathAtom::relation("≫"))?;
    add(&["asymp"], MathAtom::relation("≍"))?;
    add(&["parallel"], MathAtom::relation("∥"))?;
    add(&["subset"], MathAtom::relation("⊂"))?;
    add(&["supset"], MathAtom::relation("⊃"))?;
    add(&["approx"], MathAtom::relation("≈"))?;
    add(&["bowtie"], MathAtom::relation("⋈"))?;
    add(&["subseteq"], MathAtom::relation("⊆"))?;
    add(&["supseteq"], MathAtom::relation("⊇"))?;
    add(&["cong"], MathAtom::relation("≅"))?;
    add(&["Join"], MathAtom::relation("⋈"))?;
    add(&["sqsubset"], MathAtom::relation("⊏"))?;
    add(&["sqsupset"], MathAtom::relation("⊐"))?;
    add(&["neq", "ne"], MathAtom::relation("≠"))?;
    add(&["smile"], MathAtom::relation("⌣"))?;
    add(&["sqsubseteq"], MathAtom::relation("⊑"))?;
    add(&["sqsupseteq"], MathAtom::relation("⊒"))?;
    add(&["doteq"], MathAtom::relation("≐"))?;
    add(&["frown"], MathAtom::relation("⌢"))?;
    add(&["in"], MathAtom::relation("∈"))?;
    add(&["ni"], MathAtom::relation("∋"))?;
    add(&["notin"], MathAtom::relation("∉"))?;
    add(&["propto"], MathAtom::relation("∝"))?;
    add(&["vdash"], MathAtom::relation("⊢"))?;
    add(&["dashv"], MathAtom::relation("⊣"))?;

    // Punctuation
    add(&["colon"], MathAtom::punctuation(":"))?;
    add(&["ldotp"], MathAtom::punctuation("."))?;
    add(&["cdotp"], MathAtom::punctuation("·"))?;

    // Arrows
    add(&["leftarrow", "gets"], MathAtom::relation("←"))?;
    add(&["longleftarrow"], MathAtom::relation("⟵"))?;
    add(&["uparrow"], MathAtom::relation("↑"))?;
    add(&["Leftarrow"], MathAtom::relation("⇐"))?;
    add(&["Longleftarrow"], MathAtom::relation("⟸"))?;
    add(&["Uparrow"], MathAtom::relation("⇑"))?;
    add(&["rightarrow", "to"], MathAtom::relation("→"))?;
    add(&["longrightarrow"], MathAtom::relation("⟶"))?;
    add(&["downarrow"], MathAtom::relation("↓"))?;
    add(&["Rightarrow"], MathAtom::relation("⇒"))?;
    add(&["Longrightarrow"], MathAtom::relation("⟹"))?;
    add(&["Downarrow"], MathAtom::relation("⇓"))?;
    add(&["leftrightarrow"], MathAtom::relation("↔"))?;
    add(&["Leftrightarrow"], MathAtom::relation("⇔"))?;
    add(&["updownarrow"], MathAtom::relation("↕"))?;
    add(&["longleftrightarrow"], MathAtom::relation("⟷"))?;
    add(&["Longleftrightarrow", "iff"], MathAtom::relation("⟺"))?;
    add(&["Updownarrow"], MathAtom::relation("⇕"))?;
    add(&["mapsto"], MathAtom::relation("↦"))?;
    add(&["longmapsto"], MathAtom::relation("⟼"))?;
    add(&["nearrow"], MathAtom::relation("↗"))?;
    add(&["hookleftarrow"], MathAtom::relation("↩"))?;
    add(&["hookrightarrow"], MathAtom::relation("↪"))?;
    add(&["searrow"], MathAtom::relation("↘"))?;
    add(&["leftharpoonup"], MathAtom::relation("↼"))?;
    add(&["rightharpoonup"], MathAtom::relation("⇀"))?;
    add(&["swarrow"], MathAtom::relation("↙"))?;
    add(&["leftharpoondown"], MathAtom::relation("↽"))?;
    add(&["rightharpoondown"], MathAtom::relation("⇁"))?;
    add(&["nwarrow"], MathAtom::relation("↖"))?;
    add(&["rightleftharpoons"], MathAtom::relation("⇌"))?;
    add(&["leadsto"], MathAtom::relation("⇝"))?;

    // Miscellaneous symbols
    add(&["ldots"], MathAtom::ordinary("…"))?;
    add(&["aleph"], MathAtom::ordinary("ℵ"))?;
    add(&["hbar"], MathAtom::ordinary("ℏ"))?;
    add(&["imath"], MathAtom::ordinary("𝚤"))?;
    add(&["jmath"], MathAtom::ordinary("𝚥"))?;
    add(&["ell"], MathAtom::ordinary("ℓ"))?;
    add(&["wp"], MathAtom::ordinary("℘"))?;
    add(&["Re"], MathAtom::ordinary("ℜ"))?;
    add(&["Im"], MathAtom::ordinary("ℑ"))?;
    add(&["mho"], MathAtom::ordinary("℧"))?;
    add(&["cdots"], MathAtom::ordinary("⋯"))?;
    add(&["emptyset"], MathAtom::ordinary("∅"))?;
    add(&["nabla"], MathAtom::ordinary("∇"))?;
    add(&["surd"], MathAtom::ordinary("√"))?;
    add(&["top"], MathAtom::ordinary("⊤"))?;
    add(&["bot"], MathAtom::ordinary("⊥"))?;
    add(&["|", "Vert"], MathAtom::ordinary("‖"))?;
    add(&["angle"], MathAtom::ordinary("∠"))?;
    add(&["vdots"], MathAtom::ordinary("⋮"))?;
    add(&["forall"], MathAtom::ordinary("∀"))?;
    add(&["exists"], MathAtom::ordinary("∃"))?;
    add(&["neg", "lnot"], MathAtom::ordinary("¬"))?;
    add(&["flat"], MathAtom::ordinary("♭"))?;
    add(&["natural"], MathAtom::ordinary("♮"))?;
    add(&["sharp"], MathAtom::ordinary("♯"))?;
    add(&["backslash"], MathAtom::ordinary("\\"))?;
    add(&["partial"], MathAtom::ordinary("𝜕"))?;
    add(&["vert"], MathAtom::ordinary("|"))?;
    add(&["ddots"], MathAtom::ordinary("⋱"))?;
    add(&["infty"], MathAtom::ordinary("∞"))?;
    add(&["Box"], MathAtom::ordinary("□"))?;
    add(&["Diamond"], MathAtom::ordinary("♢"))?;
    add(&["triangle"], MathAtom::ordinary("△"))?;
    add(&["clubsuit"], MathAtom::ordinary("♣"))?;
    add(&["diamondsuit"], MathAtom::ordinary("♢"))?;
    add(&["heartsuit"], MathAtom::ordinary("♡"))?;
    add(&["spadesuit"], MathAtom::ordinary("♠"))?;

    // Big operators
    add(&["sum"], limits("∑"))?;
    add(&["prod"], limits("∏"))?;
    add(&["coprod"], limits("∐"))?;
    add(&["int"], integral("∫"))?;
    add(&["oint"], integral("∮"))?;
    add(&["bigcap"], limits("⋂"))?;
    add(&["bigcup"], limits("⋃"))?;
    add(&["bigsqcup"], limits("⨆"))?;
    add(&["bigvee"], limits("⋁"))?;
    add(&["bigwedge"], limits("⋀"))?;
    add(&["bigodot"], limits("⨀"))?;
    add(&["bigoplus"], limits("⨁"))?;
    add(&["bigotimes"], limits("⨂"))?;
    add(&["biguplus"], limits("⨄"))?;

    // Named functions
    add(&["arccos"], function("arccos"))?;
    add(&["arcsin"], function("arcsin"))?;
    add(&["arctan"], function("arctan"))?;
    add(&["arg"], function("arg"))?;
    add(&["cos"], function("cos"))?;
    add(&["cosh"], function("cosh"))?;
    add(&["cot"], function("cot"))?;
    add(&["coth"], function("coth"))?;
    add(&["csc"], function("csc"))?;
    add(&["deg"], function("deg"))?;
    add(&["det"], limits("det"))?;
    add(&["dim"], function("dim"))?;
    add(&["exp"], function("exp"))?;
    add(&["gcd"], limits("gcd"))?;
    add(&["hom"], function("hom"))?;
    add(&["inf"], limits("inf"))?;
    add(&["ker"], function("ker"))?;
    add(&["lg"], function("lg"))?;
    add(&["lim"], limits("lim"))?;
    add(&["liminf"], limits("lim inf"))?;
    add(&["limsup"], limits("lim sup"))?;
    add(&["ln"], function("ln"))?;
    add(&["log"], function("log"))?;
    add(&["max"], limits("max"))?;
    add(&["min"], limits("min"))?;
    add(&["Pr"], limits("Pr"))?;
    add(&["sec"], function("sec"))?;
    add(&["sin"], function("sin"))?;
    add(&["sinh"], function("sinh"))?;
    add(&["sup"], limits("sup"))?;
    add(&["tan"], function("tan"))?;
    add(&["tanh"], function("tanh"))?;

    // Accents
    add(&["hat"], accent("\u{0302}"))?;
    add(&["acute"], accent("\u{0301}"))?;
    add(&["bar"], accent("\u{0304}"))?;
    add(&["dot"], accent("\u{0307}"))?;
    add(&["breve"], accent("\u{0306}"))?;
    add(&["check"], accent("\u{030C}"))?;
    add(&["grave"], accent("\u{0300}"))?;
    add(&["vec"], accent("\u{20D7}"))?;
    add(&["ddot"], accent("\u{0308}"))?;
    add(&["tilde"], accent("\u{0303}"))?;

    // Wide accents
    add(&["widehat"], accent("\u{0302}"))?;
    add(&["widetilde"], accent("\u{0303}"))?;

    // AMS arrows
    add(&["leftleftarrows"], MathAtom::relation("⇇"))?;
    add(&["leftrightarrows"], MathAtom::relation("⇆"))?;
    add(&["Lleftarrow"], MathAtom::relation("⇚"))?;
    add(&["twoheadleftarrow"], MathAtom::relation("↞"))?;
    add(&["leftarrowtail"], MathAtom::relation("↢"))?;
    add(&["looparrowleft"], MathAtom::relation("↫"))?;
    add(&["leftrightharpoons"], MathAtom::relation("⇋"))?;
    add(&["curvearrowleft"], MathAtom::relation("↶"))?;
    add(&["circlearrowleft"], MathAtom::relation("↺"))?;
    add(&["Lsh"], MathAtom::relation("↰"))?;
    add(&["upuparrows"], MathAtom::relation("⇈"))?;
    add(&["upharpoonleft"], MathAtom::relation("↿"))?;
    add(&["downharpoonleft"], MathAtom::relation("⇃"))?;
    add(&["multimap"], MathAtom::relation("⊸"))?;
    add(&["leftrightsquigarrow"], MathAtom::relation("↭"))?;
    add(&["rightrightarrows"], MathAtom::relation("⇉"))?;
    add(&["rightleftarrows"], MathAtom::relation("⇄"))?;
    add(&["twoheadrightarrow"], MathAtom::relation("↠"))?;
    add(&["rightarrowtail"], MathAtom::relation("↣"))?;
    add(&["looparrowright"], MathAtom::relation("↬"))?;
    add(&["curvearrowright"], MathAtom::relation("↷"))?;
    add(&["circlearrowright"], MathAtom::relation("↻"))?;
    add(&["Rsh"], MathAtom::relation("↱"))?;
    add(&["downdownarrows"], MathAtom::relation("⇊"))?;
    add(&["upharpoonright"], MathAtom::relation("↾"))?;
    add(&["downharpoonright"], MathAtom::relation("⇂"))?;
    add(&["rightsquigarrow"], MathAtom::relation("⇝"))?;

    // AMS negated arrows
    add(&["nleftarrow"], MathAtom::relation("↚"))?;
    add(&["nrightarrow"], MathAtom::relation("↛"))?;
    add(&["nLeftarrow"], MathAtom::relation("⇍"))?;
    add(&["nRightarrow"], MathAtom::relation("⇏"))?;
    add(&["nleftrightarrow"], MathAtom::relation("↮"))?;
    add(&["nLeftrightarrow"], MathAtom::relation("⇎"))?;

    // AMS Greek
    add(&["varkappa"], MathAtom::variable("ϰ"))?;

    // AMS Hebrew
    add(&["beth"], MathAtom::ordinary("ℶ"))?;
    add(&["daleth"], MathAtom::ordinary("ℸ"))?;
    add(&["gimel"], MathAtom::ordinary("ℷ"))?;

    // AMS miscellaneous
    add(&["hslash"], MathAtom::ordinary("ℏ"))?;
    add(&["vartriangle"], MathAtom::ordinary("△"))?;
    add(&["triangledown"], MathAtom::ordinary("▽"))?;
    add(&["square"], placeholder())?;
    add(&["lozenge"], MathAtom::ordinary("◊"))?;
    add(&["measuredangle"], MathAtom::ordinary("∡"))?;
    add(&["nexists"], MathAtom::ordinary("∄"))?;
    add(&["Bbbk"], MathAtom::ordinary("𝐤"))?;
    add(&["backprime"], MathAtom::ordinary("‵"))?;
    add(&["varnothing"], MathAtom::ordinary("∅"))?;
    add(&["blacktriangle"], MathAtom::ordinary("▲"))?;
    add(&["blacktriangledown"], MathAtom::ordinary("▼"))?;
    add(&["blacksquare"], MathAtom::ordinary("▪"))?;
    add(&["blacklozenge"], MathAtom::ordinary("♦"))?;
    add(&["bigstar"], MathAtom::ordinary("⋆"))?;
    add(&["sphericalangle"], MathAtom::ordinary("∢"))?;
    add(&["complement"], MathAtom::ordinary("∁"))?;
    add(&["eth"], MathAtom::ordinary("ð"))?;
    add(&["diagup"], MathAtom::ordinary("/"))?;
    add(&["diagdown"], MathAtom::ordinary("\\"))?;

    // AMS text symbols
    add(&["checkmark"], MathAtom::ordinary("✓"))?;
    add(&["circledR"], MathAtom::ordinary("®"))?;
    add(&["maltese"], MathAtom::ordinary("✠"))?;

    // AMS binary operators
    add(&["dotplus"], MathAtom::binary_operator("∔"))?;
    add(&["smallsetminus"], MathAtom::binary_operator("∖"))?;
    add(&["Cap"], MathAtom::binary_operator("⋒"))?;
    add(&["Cup"], MathAtom::binary_operator("⋓"))?;
    add(&["barwedge"], MathAtom::binary_operator("⌅"))?;
    add(&["veebar"], MathAtom::binary_operator("⊻"))?;
    add(&["boxminus"], MathAtom::binary_operator("⊟"))?;
    add(&["boxtimes"], MathAtom::binary_operator("⊠"))?;
    add(&["boxdot"], MathAtom::binary_operator("⊡"))?;
    add(&["boxplus"], MathAtom::binary_operator("⊞"))?;
    add(&["divideontimes"], MathAtom::binary_operator("⋇"))?;
    add(&["ltimes"], MathAtom::binary_operator("⋉"))?;
    add(&["rtimes"], MathAtom::binary_operator("⋊"))?;
    add(&["leftthreetimes"], MathAtom::binary_operator("⋋"))?;
    add(&["rightthreetimes"], MathAtom::binary_operator("⋌"))?;
    add(&["curlywedge"], MathAtom::binary_operator("⋏"))?;
    add(&["curlyvee"], MathAtom::binary_operator("⋎"))?;
    add(&["circleddash"], MathAtom::binary_operator("⊝"))?;
    add(&["circledast"], MathAtom::binary_operator("⊛"))?;
    add(&["circledcirc"], MathAtom::binary_operator("⊚"))?;
    add(&["centerdot"], MathAtom::binary_operator("·"))?;
    add(&["intercal"], MathAtom::binary_operator("⊺"))?;

    Ok(commands)
}
