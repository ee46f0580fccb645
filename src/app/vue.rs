// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Panneaux : résultat, réponse JSON du contrat, démarche

use eframe::egui;

use calculatrice_rpn::contrat::Reponse;
use calculatrice_rpn::noyau::evaluer_avec_demarche;
use calculatrice_rpn::noyau::format::format_litteral_brut;
use calculatrice_rpn::noyau::reglages::PROFONDEUR_MAX;

use super::etat::{AppCalc, DemarcheUi};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+2)*2, 9/3/3, 3-(4*2)")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Imbrication max :");
            let mut p = self.reglages.profondeur_max();
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(1..=PROFONDEUR_MAX)
                    .suffix(" niveaux"),
            );
            if resp.changed() {
                self.set_profondeur(p);
            }
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(
                ui.visuals().error_fg_color,
                format!("{} : {}", self.classe_erreur(), self.erreur),
            );
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9", "/"], ["4", "5", "6", "*"], ["1", "2", "3", "-"]] {
                    for touche in ligne {
                        self.bouton_insert(ui, touche);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                self.bouton_insert(ui, "+");
                ui.end_row();

                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                ui.label("");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.eval_via_noyau();
                }
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        let titre = match self.statut {
            Some(s) => format!("Réponse ({}) :", s.code()),
            None => "Réponse :".to_string(),
        };
        ui.label(titre);
        Self::champ_monospace(ui, "reponse_out", &self.reponse_json, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(
                    ui,
                    "Parenthèses",
                    "demarche_subst",
                    &self.demarche.substitutions,
                );
                Self::champ_demarche(
                    ui,
                    "Forme plate",
                    "demarche_plate",
                    &self.demarche.forme_plate,
                );
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if resp.clicked() {
            self.entree.push_str(touche);
            self.focus_entree = true;
        }
    }

    /// Évalue via le noyau, puis dépose résultat / erreur / démarche / JSON.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();

        match evaluer_avec_demarche(&s, &self.reglages) {
            Ok((x, d)) => {
                let d_ui = DemarcheUi {
                    substitutions: d
                        .substitutions
                        .iter()
                        .map(|sub| sub.to_string())
                        .collect::<Vec<_>>()
                        .join("\n"),
                    forme_plate: d.forme_plate,
                    jetons: d.jetons,
                };
                let json = Reponse::resultat(x).en_json();
                self.set_resultat(format_litteral_brut(x), d_ui, json);
            }
            Err(e) => {
                let reponse = Reponse::depuis_erreur(&e);
                self.set_erreur(e.to_string(), reponse.statut, reponse.en_json());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
