//! egui front end.
//!
//! Immediate-mode UI over the mapping core: the whole interface is rebuilt
//! each frame from the registry's current state, and every user edit is
//! applied synchronously within that frame. The main window carries the
//! Reload/Save/Load controls and the device list; each selected device gets
//! its own window with the slot stepper and per-axis curve controls.

pub mod common;

use std::path::PathBuf;
use std::time::Duration;

use egui::Context;
use tracing::warn;

use crate::config::AppConfig;
use crate::input::InputSource;
use crate::mapping::{engine, store, AxisChannel, DeviceRegistry};
use crate::vjoy::{SlotPool, VJoyDriver};

pub struct JoymapApp<I: InputSource, D: VJoyDriver> {
    input: I,
    pool: SlotPool<D>,
    registry: DeviceRegistry,
    assignment_file: PathBuf,
}

impl<I: InputSource, D: VJoyDriver> JoymapApp<I, D> {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        mut input: I,
        pool: SlotPool<D>,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        cc.egui_ctx.set_pixels_per_point(config.ui_scale);

        let mut registry = DeviceRegistry::new();
        registry.merge(DeviceRegistry::discover(&mut input));

        JoymapApp {
            input,
            pool,
            registry,
            assignment_file: config.assignment_file.clone(),
        }
    }

    fn control_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Reload").clicked() {
                let discovered = DeviceRegistry::discover(&mut self.input);
                self.registry.merge(discovered);
            }
            if ui.button("Save").clicked() {
                if let Err(e) = store::save(&self.assignment_file, self.registry.devices()) {
                    warn!("save failed: {}", e);
                }
            }
            if ui.button("Load").clicked() {
                let records = store::load(&self.assignment_file);
                store::apply(&records, self.registry.devices_mut());
            }
        });
    }

    fn device_list(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for device in self.registry.devices_mut() {
                if ui.button(device.label()).clicked() {
                    device.selected = !device.selected;
                    // Deselecting releases the slot.
                    if !device.selected {
                        device.mapped_to = 0;
                    }
                }
            }
        });
    }

    fn device_windows(&mut self, ctx: &Context) {
        let slot_count = self.pool.slot_count();

        for index in 0..self.registry.devices().len() {
            let (id, label, handle, selected) = {
                let device = &self.registry.devices()[index];
                (
                    device.id.clone(),
                    device.label(),
                    device.handle,
                    device.selected,
                )
            };
            if !selected {
                continue;
            }

            let exclude = self.registry.slots_in_use_except(&id);
            let axes = self.input.axes(handle);
            let device = &mut self.registry.devices_mut()[index];

            egui::Window::new(label)
                .id(egui::Id::new(&id))
                .show(ctx, |ui| {
                    ui.label(&device.name);
                    common::stepper(ui, &mut device.mapped_to, 0, slot_count, &exclude);

                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let shown = AxisChannel::COUNT.min(axes.len());
                        for (axis_index, channel) in
                            AxisChannel::ALL.iter().take(shown).enumerate()
                        {
                            ui.horizontal(|ui| {
                                ui.label(format!("Axis {}: {}", axis_index, channel));

                                let settings = &mut device.axis_settings[axis_index];
                                let mut curve = settings.curve_type as u32;
                                if common::stepper(ui, &mut curve, 0, 1, &[]) {
                                    settings.curve_type = curve as u8;
                                }
                                ui.checkbox(&mut settings.reversed, "Reverse");
                            });
                        }
                    });
                });
        }
    }
}

impl<I, D> eframe::App for JoymapApp<I, D>
where
    I: InputSource + 'static,
    D: VJoyDriver + 'static,
{
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Keep polling while idle; axis writes must not wait for UI events.
        ctx.request_repaint_after(Duration::from_millis(16));

        engine::pump_frame(&mut self.registry, &mut self.input, &mut self.pool);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.control_row(ui);
            ui.separator();
            self.device_list(ui);
        });

        self.device_windows(ctx);
    }
}
