//! Known external channels for Instagram usernames

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const YOUTUBE_CHANNELS: &[(&str, &str)] = &[
    ("aeromexico", "https://www.youtube.com/@aeromexico"),
    ("afa", "https://www.youtube.com/@AFASeleccion"),
    ("agn", "https://www.youtube.com/@AGNMexico"),
    ("agnargentina", "https://www.youtube.com/@AGNArgentina"),
    ("agncolombia", "https://www.youtube.com/@AGNColombia"),
    ("agricultura", "https://www.youtube.com/@AGRICULTURA_MX"),
    ("alcaldiabogota", "https://www.youtube.com/@AlcaldiaBogota"),
    ("america", "https://www.youtube.com/@ClubAmerica"),
    ("anfp", "https://www.youtube.com/@ANFPChile"),
    ("antioquia", "https://www.youtube.com/@GobAntioquia"),
    ("armadademexico", "https://www.youtube.com/@ArmadadeMexico"),
    ("atlantico", "https://www.youtube.com/@GobAtlantico"),
    ("avianca", "https://www.youtube.com/@avianca"),
    ("azteca7", "https://www.youtube.com/@Azteca7"),
    ("aztecauno", "https://www.youtube.com/@AztecaUno"),
    ("banamex", "https://www.youtube.com/@Citibanamex"),
    ("bancodebogota", "https://www.youtube.com/@BancodeBogota"),
    ("bancolombia", "https://www.youtube.com/@grupobancolombia"),
    ("banorte", "https://www.youtube.com/@banorte"),
    ("banrepcultural", "https://www.youtube.com/@BanrepCultural"),
    ("bbvamexico", "https://www.youtube.com/@BBVAMexico"),
    ("bellasartes", "https://www.youtube.com/@bellasartesmx"),
    ("bibliotecanal", "https://www.youtube.com/@bibliotecanacional"),
    ("bibliotecanalargentina", "https://www.youtube.com/@BibliotecaNacionalArgentina"),
    ("bibliotecanalchile", "https://www.youtube.com/@bibliotecanacionaldechile"),
    ("bibliotecanalco", "https://www.youtube.com/@BibliotecaNacionalColombia"),
    ("bibliotecavasconcelos", "https://www.youtube.com/@BibliotecaVasconcelos"),
    ("bienestar", "https://www.youtube.com/@BienestarMX"),
    ("bimbo", "https://www.youtube.com/@Bimbo"),
    ("bluradio", "https://www.youtube.com/@BluRadioCo"),
    ("boca", "https://www.youtube.com/@BocaJuniors"),
    ("bogotaturismo", "https://www.youtube.com/@bogotaturismo"),
    ("bolivar", "https://www.youtube.com/@GobBolivar"),
    ("canal22", "https://www.youtube.com/@Canal22"),
    ("canal22memoria", "https://www.youtube.com/@MemoriaCanal22"),
    ("canal5", "https://www.youtube.com/@Canal5"),
    ("canaldelcongreso", "https://www.youtube.com/@CanaldelCongreso"),
    ("canaloncetv", "https://www.youtube.com/@CanalOnceTV"),
    ("caracolradio", "https://www.youtube.com/@CaracolRadio"),
    ("casaamerica", "https://www.youtube.com/@CasaAmerica"),
    ("casalamm", "https://www.youtube.com/@CasaLamm"),
    ("casarealtv", "https://www.youtube.com/@casarealtv"),
    ("ccemx", "https://www.youtube.com/@CCEMx"),
    ("cdmx", "https://www.youtube.com/@GobiernoCDMX"),
    ("cenart", "https://www.youtube.com/@CENART_MX"),
    ("centroculturalbogota", "https://www.youtube.com/@CentroCulturalBogota"),
    ("centroculturalespana", "https://www.youtube.com/@CCEMx"),
    ("centroimagen", "https://www.youtube.com/@CentroImagen"),
    ("cervantino", "https://www.youtube.com/@FestivalCervantino"),
    ("chiapas", "https://www.youtube.com/@GobiernoChiapas"),
    ("chiletravel", "https://www.youtube.com/@chiletravel"),
    ("chivas", "https://www.youtube.com/@Chivas"),
    ("cineteca", "https://www.youtube.com/@CinetecaNacional"),
    ("citibanamex", "https://www.youtube.com/@Citibanamex"),
    ("clarin", "https://www.youtube.com/@clarin"),
    ("cocacola", "https://www.youtube.com/@CocaColaMexico"),
    ("colocolo", "https://www.youtube.com/@ColoColo"),
    ("colombiatravel", "https://www.youtube.com/@colombiatravel"),
    ("comunicaciones", "https://www.youtube.com/@SCT_mx"),
    ("conaculta", "https://www.youtube.com/@conaculta"),
    ("consulmexchi", "https://www.youtube.com/@ConsulmexChicago"),
    ("consulmexhou", "https://www.youtube.com/@ConsulmexHouston"),
    ("consulmexla", "https://www.youtube.com/@ConsulmexLA"),
    ("consulmexny", "https://www.youtube.com/@ConsulmexNY"),
    ("consulmexsea", "https://www.youtube.com/@consulmexsea"),
    ("copa", "https://www.youtube.com/@CopaAirlines"),
    ("coppel", "https://www.youtube.com/@Coppel"),
    ("corinthians", "https://www.youtube.com/@Corinthians"),
    ("corona", "https://www.youtube.com/@Corona"),
    ("cruzazul", "https://www.youtube.com/@CruzAzul"),
    ("cultura", "https://www.youtube.com/@CulturaMexico"),
    ("cundinamarca", "https://www.youtube.com/@GobCundinamarca"),
    ("davivienda", "https://www.youtube.com/@Davivienda"),
    ("ecobici", "https://www.youtube.com/@EcobiciCDMX"),
    ("economia", "https://www.youtube.com/@SE_mx"),
    ("ecuadortravel", "https://www.youtube.com/@ecuadortravel"),
    ("edomex", "https://www.youtube.com/@GobiernoEdoMex"),
    ("ejercitomexicano", "https://www.youtube.com/@EjercitoMexicano"),
    ("elcomercio", "https://www.youtube.com/@elcomercio"),
    ("elektra", "https://www.youtube.com/@Elektra"),
    ("elespectador", "https://www.youtube.com/@ElEspectador"),
    ("elfinanciero", "https://www.youtube.com/@ElFinancieroTV"),
    ("elmercurio", "https://www.youtube.com/@ElMercurioChile"),
    ("elnacional", "https://www.youtube.com/@elnacionaldominicano"),
    ("elpalaciodehierro", "https://www.youtube.com/@ElPalacioDeHierro"),
    ("eltiempo", "https://www.youtube.com/@eltiempo"),
    ("eluniversal", "https://www.youtube.com/@ElUniversalMex"),
    ("embamex_italia", "https://www.youtube.com/@embamex_italia"),
    ("embamexcan", "https://www.youtube.com/@embamexcan"),
    ("embamexchi", "https://www.youtube.com/@embamexchi"),
    ("embamexcol", "https://www.youtube.com/@embamexcol"),
    ("embamexesp", "https://www.youtube.com/@embamexesp"),
    ("embamexeua", "https://www.youtube.com/@embamexeua"),
    ("embamexgua", "https://www.youtube.com/@embamexgua"),
    ("embamexjp", "https://www.youtube.com/@embamexjp"),
    ("embamexlibano", "https://www.youtube.com/@embamexlibano"),
    ("embamexperu", "https://www.youtube.com/@embamexperu"),
    ("embamexur", "https://www.youtube.com/@embamexur"),
    ("embamexvenezuela", "https://www.youtube.com/@embamexvenezuela"),
    ("estereopicnic", "https://www.youtube.com/@EsteroPicnic"),
    ("excelsior", "https://www.youtube.com/@ExcelsiorMex"),
    ("exito", "https://www.youtube.com/@almacenesexito"),
    ("falabella", "https://www.youtube.com/@Falabella"),
    ("fce", "https://www.youtube.com/@FondoCulturaEconomica"),
    ("fcfseleccioncol", "https://www.youtube.com/@FCFSeleccionCol"),
    ("fedmexfut", "https://www.youtube.com/@FedMexFut"),
    ("filarmonica", "https://www.youtube.com/@FilarmonicaColombia"),
    ("filmoteca", "https://www.youtube.com/@FilmotecaUNAM"),
    ("filo", "https://www.youtube.com/@FILOaxaca"),
    ("flamengo", "https://www.youtube.com/@Flamengo"),
    ("fonatur", "https://www.youtube.com/@FONATUR_MX"),
    ("forotv", "https://www.youtube.com/@ForoTV"),
    ("fpf", "https://www.youtube.com/@FPFOficial"),
    ("franciaenmexico", "https://www.youtube.com/@FranciaenMexico"),
    ("galavision", "https://www.youtube.com/@Galavision"),
    ("gam", "https://www.youtube.com/@CentroGAM"),
    ("gobmexico", "https://www.youtube.com/@gobiernodemexico"),
    ("grupmodelo", "https://www.youtube.com/@GrupoModelo"),
    ("guadalajaramx", "https://www.youtube.com/@GobiernoGuadalajara"),
    ("guanajuato", "https://www.youtube.com/@GobiernoGuanajuato"),
    ("guardianacionalmx", "https://www.youtube.com/@GuardiaNacionalMX"),
    ("guggenheim", "https://www.youtube.com/@GuggenheimMuseum"),
    ("hacienda_mexico", "https://www.youtube.com/@HaciendaMexico"),
    ("hsbc", "https://www.youtube.com/@HSBCMexico"),
    ("imagenradio", "https://www.youtube.com/@ImagenRadio"),
    ("imagentv", "https://www.youtube.com/@ImagenTelevisión"),
    ("imcine", "https://www.youtube.com/@IMCINEmx"),
    ("inah", "https://www.youtube.com/@INAHTV"),
    ("inahmx", "https://www.youtube.com/@INAHTV"),
    ("inba", "https://www.youtube.com/@INBAmx"),
    ("infopresidencia", "https://www.youtube.com/@PresidenciaColombiaOficial"),
    ("inprotur", "https://www.youtube.com/@INPROTUR"),
    ("institutocervantes", "https://www.youtube.com/@InstitutoCervantes"),
    ("ipn", "https://www.youtube.com/@IPN_MX"),
    ("itesm", "https://www.youtube.com/@TecdeMonterrey"),
    ("jalisco", "https://www.youtube.com/@GobiernoJalisco"),
    ("javeriana", "https://www.youtube.com/@PontificiaJaveriana"),
    ("jornada", "https://www.youtube.com/@LaJornadaOnLine"),
    ("jumex", "https://www.youtube.com/@Jumex"),
    ("lala", "https://www.youtube.com/@LALA"),
    ("lanacion", "https://www.youtube.com/@lanacion"),
    ("laoctava", "https://www.youtube.com/@LaOctava"),
    ("lasestrellas", "https://www.youtube.com/@LasEstrellas"),
    ("latam", "https://www.youtube.com/@LATAM"),
    ("latamairlines", "https://www.youtube.com/@LATAM"),
    ("latercera", "https://www.youtube.com/@latercera"),
    ("ligamx", "https://www.youtube.com/@LigaMX"),
    ("liverpool", "https://www.youtube.com/@Liverpool"),
    ("lollapalooza", "https://www.youtube.com/@LollapaloozaCL"),
    ("mac", "https://www.youtube.com/@MACChile"),
    ("macba", "https://www.youtube.com/@MACBA_Barcelona"),
    ("macchile", "https://www.youtube.com/@MACChile"),
    ("malba", "https://www.youtube.com/@malbamuseo"),
    ("mali", "https://www.youtube.com/@museodeartedelima"),
    ("mam", "https://www.youtube.com/@MAMSaoPaulo"),
    ("masp", "https://www.youtube.com/@maspmuseu"),
    ("mavi", "https://www.youtube.com/@MAVISantiago"),
    ("memoriaychile", "https://www.youtube.com/@MuseoMemoriaChile"),
    ("metrobus", "https://www.youtube.com/@Metrobus_CDMX"),
    ("metrocaracas", "https://www.youtube.com/@metrocaracas"),
    ("metrocdmx", "https://www.youtube.com/@MetroCDMX"),
    ("metrodebogota", "https://www.youtube.com/@metrodebogota"),
    ("metrolima", "https://www.youtube.com/@MetrodeLima"),
    ("metromedellin", "https://www.youtube.com/@metrodemedellin"),
    ("metroquito", "https://www.youtube.com/@MetroQuito"),
    ("metrosantiago", "https://www.youtube.com/@metrodesantiago"),
    ("mexicotravelchannel", "https://www.youtube.com/@MexicoTravelChannel"),
    ("milenio", "https://www.youtube.com/@MilenioNoticias"),
    ("millonarios", "https://www.youtube.com/@MillonariosFC"),
    ("minagricultura", "https://www.youtube.com/@MinAgricultura"),
    ("minambiente", "https://www.youtube.com/@MinAmbiente"),
    ("minciencias", "https://www.youtube.com/@MinCiencias"),
    ("mincit", "https://www.youtube.com/@MinComercioColombia"),
    ("mincomercio", "https://www.youtube.com/@MincomercioColombia"),
    ("mincultura", "https://www.youtube.com/@MinisterioCulturaColombia"),
    ("mindefensa", "https://www.youtube.com/@MindefensaColombia"),
    ("mineducacion", "https://www.youtube.com/@Mineducacion"),
    ("mineducacioncol", "https://www.youtube.com/@Mineducacion"),
    ("minhacienda", "https://www.youtube.com/@MinHaciendaColombia"),
    ("mininterior", "https://www.youtube.com/@MinInterior"),
    ("minjusticia", "https://www.youtube.com/@MinJusticia"),
    ("minrelext", "https://www.youtube.com/@CancilleriaColombia"),
    ("minsaludcol", "https://www.youtube.com/@MinSaludColombia"),
    ("minticscolombia", "https://www.youtube.com/@MinTICColombia"),
    ("mintrabajocol", "https://www.youtube.com/@MintrabajoColombia"),
    ("mintransporteco", "https://www.youtube.com/@Mintransporte"),
    ("minvivienda", "https://www.youtube.com/@MinVivienda"),
    ("mna", "https://www.youtube.com/@museonacionaldeantropologia"),
    ("mnba", "https://www.youtube.com/@museobellasarteschile"),
    ("monterrey", "https://www.youtube.com/@RayadosMTY"),
    ("monterreymx", "https://www.youtube.com/@GobiernoMonterrey"),
    ("muac", "https://www.youtube.com/@MUAC_UNAM"),
    ("multimedios", "https://www.youtube.com/@multimedios"),
    ("munal", "https://www.youtube.com/@munal_mx"),
    ("museoantropo", "https://www.youtube.com/@museonacionaldeantropologia"),
    ("museobellasartes", "https://www.youtube.com/@museobellasartes"),
    ("museobotero", "https://www.youtube.com/@museobotero"),
    ("museodeartemoderno", "https://www.youtube.com/@MuseoArteModernoMX"),
    ("museodeloro", "https://www.youtube.com/@museodeloro"),
    ("museodelprado", "https://www.youtube.com/@museodelprado"),
    ("museoevita", "https://www.youtube.com/@museoevita"),
    ("museofridakahlo", "https://www.youtube.com/@museofridakahlo"),
    ("museojumex", "https://www.youtube.com/@museojumex"),
    ("museolarco", "https://www.youtube.com/@museolarco"),
    ("museomemoria", "https://www.youtube.com/@museomemoria"),
    ("museonacion", "https://www.youtube.com/@MuseoNacionPeru"),
    ("museonacional", "https://www.youtube.com/@museonacionaldecolombia"),
    ("museonacionalmexico", "https://www.youtube.com/@museonacionalmexico"),
    ("museonal", "https://www.youtube.com/@museonacionaldecolombia"),
    ("museooro", "https://www.youtube.com/@MuseoOroPeru"),
    ("museoreinasofia", "https://www.youtube.com/@museoreinasofia"),
    ("museosoumaya", "https://www.youtube.com/@museosoumaya"),
    ("museotamayo", "https://www.youtube.com/@museotamayo"),
    ("museudonacional", "https://www.youtube.com/@MuseuNacional"),
    ("museuhistorico", "https://www.youtube.com/@museuhistoriconacional"),
    ("museumofmodernart", "https://www.youtube.com/@MoMAvideos"),
    ("mvsnoticias", "https://www.youtube.com/@MVSNoticias"),
    ("nacional", "https://www.youtube.com/@AtleticoNacional"),
    ("nuevoleon", "https://www.youtube.com/@nuevoleon"),
    ("oaxaca", "https://www.youtube.com/@GobiernoOaxaca"),
    ("ofilarmonica", "https://www.youtube.com/@OFILMexico"),
    ("osn", "https://www.youtube.com/@OSNMexico"),
    ("ossodre", "https://www.youtube.com/@OSSODRE"),
    ("oxxo", "https://www.youtube.com/@OXXOTiendas"),
    ("palaciobellas", "https://www.youtube.com/@PalacioBellasArtes"),
    ("palmeiras", "https://www.youtube.com/@Palmeiras"),
    ("penafiel", "https://www.youtube.com/@Penafiel"),
    ("pinacoteca", "https://www.youtube.com/@Pinacoteca"),
    ("policianalco", "https://www.youtube.com/@PoliciaNacionalColombia"),
    ("precolombino", "https://www.youtube.com/@museoprecolombino"),
    ("presidenciacol", "https://www.youtube.com/@presidenciacolombia"),
    ("presidenciamx", "https://www.youtube.com/@PresidenciaMexico"),
    ("proceso", "https://www.youtube.com/@procesomx"),
    ("procolombia", "https://www.youtube.com/@PROCOLOMBIA"),
    ("promperu", "https://www.youtube.com/@PROMPERU"),
    ("pucchile", "https://www.youtube.com/@pucchile"),
    ("pucp", "https://www.youtube.com/@pucp"),
    ("puebla", "https://www.youtube.com/@GobiernoPuebla"),
    ("pumas", "https://www.youtube.com/@PumasUNAM"),
    ("queretaro", "https://www.youtube.com/@GobiernoQueretaro"),
    ("radioformula", "https://www.youtube.com/@RadioFormula"),
    ("reforma", "https://www.youtube.com/@reforma"),
    ("ripley", "https://www.youtube.com/@Ripley"),
    ("river", "https://www.youtube.com/@RiverPlate"),
    ("rockalsparque", "https://www.youtube.com/@RockalParque"),
    ("salud", "https://www.youtube.com/@SecretariadeSaludMexico"),
    ("saludmexico", "https://www.youtube.com/@SecretariadeSaludMexico"),
    ("sanborns", "https://www.youtube.com/@Sanborns"),
    ("santafe", "https://www.youtube.com/@SantaFe"),
    ("santander", "https://www.youtube.com/@GobSantander"),
    ("santandermexico", "https://www.youtube.com/@SantanderMexico"),
    ("santos", "https://www.youtube.com/@SantosLaguna"),
    ("scotiabank", "https://www.youtube.com/@ScotiabankMexico"),
    ("sct_mx", "https://www.youtube.com/@SCT_mx"),
    ("sears", "https://www.youtube.com/@SearsMexico"),
    ("sectur", "https://www.youtube.com/@SECTUR_MX"),
    ("sedena", "https://www.youtube.com/@SEDENA_mx"),
    ("semana", "https://www.youtube.com/@RevistaSemana"),
    ("semar", "https://www.youtube.com/@SEMARMexico"),
    ("semarnat", "https://www.youtube.com/@SEMARNAT_mx"),
    ("semarnat_mexico", "https://www.youtube.com/@SEMARNAT_mx"),
    ("sener", "https://www.youtube.com/@SENER_mx"),
    ("sep", "https://www.youtube.com/@SEPmexico"),
    ("sepgobmx", "https://www.youtube.com/@SEPGobMx"),
    ("sernatur", "https://www.youtube.com/@SERNATUR"),
    ("sinfonica", "https://www.youtube.com/@SinfonicaNacional"),
    ("sremx", "https://www.youtube.com/@sre_mx"),
    ("teatrocolon", "https://www.youtube.com/@teatrocolon"),
    ("teatrocolonbogota", "https://www.youtube.com/@teatrocolonbogota"),
    ("teatrodiana", "https://www.youtube.com/@TeatroDiana"),
    ("teatrojorgenegar", "https://www.youtube.com/@TeatroJorgeNegrete"),
    ("teatrometropolitan", "https://www.youtube.com/@TeatroMetropolitan"),
    ("teatromunicipal", "https://www.youtube.com/@teatromunicipal"),
    ("teatrosolis", "https://www.youtube.com/@teatrosolis"),
    ("telemundo", "https://www.youtube.com/@Telemundo"),
    ("televisa", "https://www.youtube.com/@televisa"),
    ("tigres", "https://www.youtube.com/@TigresOficial"),
    ("toluca", "https://www.youtube.com/@Toluca"),
    ("transmilenio", "https://www.youtube.com/@TransMilenio"),
    ("tudn", "https://www.youtube.com/@TUDN"),
    ("turismomedellin", "https://www.youtube.com/@TurismoMedellin"),
    ("tvsenado", "https://www.youtube.com/@TVSenadoBrasil"),
    ("uamx", "https://www.youtube.com/@UAM_MX"),
    ("uba", "https://www.youtube.com/@UBAonline"),
    ("uchile", "https://www.youtube.com/@uchile"),
    ("unal", "https://www.youtube.com/@universidadnacionaldecolombia"),
    ("unam", "https://www.youtube.com/@UNAM_MX"),
    ("uniandes", "https://www.youtube.com/@uniandes"),
    ("unimas", "https://www.youtube.com/@UniMas"),
    ("universidadchile", "https://www.youtube.com/@UdeChile"),
    ("univision", "https://www.youtube.com/@univision"),
    ("uruguaynatural", "https://www.youtube.com/@uruguaynatural"),
    ("usembassymex", "https://www.youtube.com/@USEmbassyMexico"),
    ("usp", "https://www.youtube.com/@canalusp"),
    ("valledelcauca", "https://www.youtube.com/@GobValle"),
    ("veracruz", "https://www.youtube.com/@GobiernoVeracruz"),
    ("visitargentina", "https://www.youtube.com/@visitargentina"),
    ("visitcdmx", "https://www.youtube.com/@VisitCDMX"),
    ("visitmexico", "https://www.youtube.com/@VisitMexico"),
    ("visitperu", "https://www.youtube.com/@visitperu"),
    ("vivaaerobus", "https://www.youtube.com/@VivaAerobus"),
    ("vivelatino", "https://www.youtube.com/@ViveLatino"),
    ("volaris", "https://www.youtube.com/@volarisoficial"),
    ("wradio", "https://www.youtube.com/@WRadioColombia"),
    ("yucatan", "https://www.youtube.com/@GobiernoYucatan"),
];

const WEBSITES: &[(&str, &str)] = &[
    ("alcaldiabogota", "https://bogota.gov.co/"),
    ("bancodebogota", "https://www.bancodebogota.com/"),
    ("bancolombia", "https://www.bancolombia.com/"),
    ("banrepcultural", "https://www.banrepcultural.org/"),
    ("embamexcol", "https://embamex.sre.gob.mx/colombia/"),
    ("embamexeua", "https://embamex.sre.gob.mx/eua/"),
    ("mambo", "https://mambogota.com/"),
    ("metrodebogota", "https://www.metrodebogota.gov.co/"),
    ("mincultura", "https://www.mincultura.gov.co/"),
    ("mineducacioncol", "https://www.mineducacion.gov.co/"),
    ("minsaludcol", "https://www.minsalud.gov.co/"),
    ("mintrabajocol", "https://www.mintrabajo.gov.co/"),
    ("museonacional", "https://museonacional.gov.co/"),
    ("presidenciacol", "https://www.presidencia.gov.co/"),
    ("transmilenio", "https://www.transmilenio.gov.co/"),
    ("uniandes", "https://uniandes.edu.co/"),
    ("uninorte", "https://www.uninorte.edu.co/"),
];

fn youtube_map_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"const youtubeMap = \{[^}]*\};").unwrap())
}

/// Start of the declaration the hover-menu script update replaces.
pub const YOUTUBE_MAP_MARKER: &str = "const youtubeMap =";

/// Username to URL tables for YouTube channels and websites.
///
/// Usernames are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    youtube: BTreeMap<String, String>,
    websites: BTreeMap<String, String>,
}

impl Directory {
    pub fn builtin() -> Self {
        Self::with_overrides(&BTreeMap::new(), &BTreeMap::new())
    }

    /// Builtin tables with config entries added; config wins on conflicts.
    pub fn with_overrides(
        youtube: &BTreeMap<String, String>,
        websites: &BTreeMap<String, String>,
    ) -> Self {
        let mut directory = Self {
            youtube: table(YOUTUBE_CHANNELS),
            websites: table(WEBSITES),
        };
        for (name, url) in youtube {
            directory
                .youtube
                .insert(name.to_lowercase(), url.trim().to_string());
        }
        for (name, url) in websites {
            directory
                .websites
                .insert(name.to_lowercase(), url.trim().to_string());
        }
        directory
    }

    pub fn youtube_url(&self, username: &str) -> Option<&str> {
        self.youtube
            .get(&username.to_lowercase())
            .map(String::as_str)
    }

    pub fn website_url(&self, username: &str) -> Option<&str> {
        self.websites
            .get(&username.to_lowercase())
            .map(String::as_str)
    }

    /// YouTube entries sorted by username.
    pub fn youtube_channels(&self) -> &BTreeMap<String, String> {
        &self.youtube
    }
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
}

/// Render the `youtubeMap` object literal.
///
/// `indent` is the indentation of the `const` line; entries go one level deeper.
pub fn render_youtube_map(channels: &BTreeMap<String, String>, indent: &str) -> String {
    let entries: Vec<String> = channels
        .iter()
        .map(|(name, url)| format!("{}    '{}': '{}'", indent, js_escape(name), js_escape(url)))
        .collect();

    if entries.is_empty() {
        return "const youtubeMap = {\n".to_string() + indent + "};";
    }

    format!(
        "const youtubeMap = {{\n{}\n{}}};",
        entries.join(",\n"),
        indent
    )
}

/// Replace the first `const youtubeMap = {...};` in `script`.
///
/// Returns `None` when the script has no such literal.
pub fn replace_youtube_map(script: &str, channels: &BTreeMap<String, String>) -> Option<String> {
    let found = youtube_map_regex().find(script)?;

    let line_start = script[..found.start()]
        .rfind('\n')
        .map(|at| at + 1)
        .unwrap_or(0);
    let indent: String = script[line_start..found.start()]
        .chars()
        .take_while(|ch| *ch == ' ' || *ch == '\t')
        .collect();

    let mut updated = String::with_capacity(script.len());
    updated.push_str(&script[..found.start()]);
    updated.push_str(&render_youtube_map(channels, &indent));
    updated.push_str(&script[found.end()..]);
    Some(updated)
}

fn js_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_case_insensitive() {
        let directory = Directory::builtin();
        assert_eq!(
            directory.youtube_url("MuseoBotero"),
            Some("https://www.youtube.com/@museobotero")
        );
        assert_eq!(
            directory.website_url("bancolombia"),
            Some("https://www.bancolombia.com/")
        );
        assert_eq!(directory.website_url("nobody"), None);
    }

    #[test]
    fn builtin_youtube_table_covers_every_group() {
        let directory = Directory::builtin();
        assert_eq!(directory.youtube_channels().len(), 305);

        for (name, url) in [
            ("infopresidencia", "https://www.youtube.com/@PresidenciaColombiaOficial"),
            ("sremx", "https://www.youtube.com/@sre_mx"),
            ("consulmexsea", "https://www.youtube.com/@consulmexsea"),
            ("museodelprado", "https://www.youtube.com/@museodelprado"),
            ("unam", "https://www.youtube.com/@UNAM_MX"),
            ("policianalco", "https://www.youtube.com/@PoliciaNacionalColombia"),
            ("bancolombia", "https://www.youtube.com/@grupobancolombia"),
            ("transmilenio", "https://www.youtube.com/@TransMilenio"),
            ("metrodebogota", "https://www.youtube.com/@metrodebogota"),
            ("cervantino", "https://www.youtube.com/@FestivalCervantino"),
            ("caracolradio", "https://www.youtube.com/@CaracolRadio"),
            ("elpalaciodehierro", "https://www.youtube.com/@ElPalacioDeHierro"),
            ("bimbo", "https://www.youtube.com/@Bimbo"),
        ] {
            assert_eq!(directory.youtube_url(name), Some(url), "{}", name);
        }
    }

    #[test]
    fn overrides_add_and_replace() {
        let mut youtube = BTreeMap::new();
        youtube.insert("NewChannel".to_string(), "https://www.youtube.com/@new".to_string());
        youtube.insert(
            "museobotero".to_string(),
            "https://www.youtube.com/@botero".to_string(),
        );
        let directory = Directory::with_overrides(&youtube, &BTreeMap::new());

        assert_eq!(
            directory.youtube_url("newchannel"),
            Some("https://www.youtube.com/@new")
        );
        assert_eq!(
            directory.youtube_url("museobotero"),
            Some("https://www.youtube.com/@botero")
        );
    }

    #[test]
    fn replaces_map_with_matching_indent() {
        let script = "function init() {\n        const youtubeMap = {\n            'old': 'x'\n        };\n        run();\n}\n";
        let mut channels = BTreeMap::new();
        channels.insert("b".to_string(), "https://y/b".to_string());
        channels.insert("a".to_string(), "https://y/a".to_string());

        let updated = replace_youtube_map(script, &channels).unwrap();
        assert_eq!(
            updated,
            "function init() {\n        const youtubeMap = {\n            'a': 'https://y/a',\n            'b': 'https://y/b'\n        };\n        run();\n}\n"
        );
        assert_eq!(replace_youtube_map(&updated, &channels).unwrap(), updated);
    }

    #[test]
    fn missing_marker() {
        assert_eq!(replace_youtube_map("const other = {};", &BTreeMap::new()), None);
    }

    #[test]
    fn escapes_quotes() {
        let mut channels = BTreeMap::new();
        channels.insert("o'brien".to_string(), "https://y/o".to_string());
        let rendered = render_youtube_map(&channels, "");
        assert!(rendered.contains(r"'o\'brien'"));
    }
}
